/// Settings for starting a [`RegistrySystem`](crate::system::RegistrySystem).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemConfig {
    /// Capacity of the service's request channel.
    pub buffer_size: usize,
    /// Filter used when `RUST_LOG` is unset or unparsable.
    pub default_log_filter: String,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            buffer_size: 100,
            default_log_filter: "info".to_string(),
        }
    }
}

impl SystemConfig {
    pub fn with_buffer_size(mut self, buffer_size: usize) -> Self {
        self.buffer_size = buffer_size;
        self
    }

    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.default_log_filter = filter.into();
        self
    }
}
