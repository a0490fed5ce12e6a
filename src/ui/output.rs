use jobprune::config::ConfigWarning;

use crate::ui::primitives::tag::StatusTag;

pub fn print_config_warnings(warnings: &[ConfigWarning], supports_color: bool) {
    for warning in warnings {
        eprintln!("{}", StatusTag::Warning.line(warning, supports_color));
    }
}
