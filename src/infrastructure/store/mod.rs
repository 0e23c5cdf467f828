mod memory_job_store;
mod redis_job_store;

pub use memory_job_store::MemoryJobStore;
pub use redis_job_store::RedisJobStore;
