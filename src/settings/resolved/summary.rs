use super::ResolvedConfig;
use crate::settings::util::mask_token;

pub(super) fn print_summary(config: &ResolvedConfig) {
	println!("Effective configuration:");
	println!("  API host: {}", config.host);
	println!("  API token: {}", mask_token(&config.token));
	if config.initial_query.is_empty() {
		println!("  Initial query: (my active tasks)");
	} else {
		println!("  Initial query: {}", config.initial_query);
	}
	println!("  Debounce: {} ms", config.debounce.as_millis());
}
