mod settings;

pub use settings::{
    GenerationSettings, QueueSettings, ServerSettings, Settings, SettingsError, StoreSettings,
};
