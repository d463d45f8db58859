use crate::core::config::data::{path_display, Config, DEFAULT_BASE_URL};

impl Config {
    pub fn print_all(&self) {
        println!("Current configuration:");
        match &self.base_url {
            Some(base_url) => println!("  base-url: {base_url}"),
            None => println!("  base-url: (unset, using {DEFAULT_BASE_URL})"),
        }
        match &self.theme {
            Some(theme) => println!("  theme: {theme}"),
            None => println!("  theme: (unset)"),
        }
        if let Ok(path) = Self::get_config_path() {
            println!("  file: {}", path_display(path));
        }
    }
}
