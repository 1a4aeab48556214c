//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# Nexus Configuration
# Only override what you want to change -- missing fields use defaults.

[backend]
# endpoint = "https://arsalan-ai-backend.onrender.com/ask"
# connect_timeout_secs = 10      # TCP connect timeout
# request_timeout_secs = 120     # whole-request timeout

[chat]
# greeting = "Hello! I am your advanced AI assistant. Ready to explore ideas with you."
# model_label = "OpenRouter/auto"
"##
    .to_string()
}
