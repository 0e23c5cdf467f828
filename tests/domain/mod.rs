mod job_test;
mod quiz_test;
