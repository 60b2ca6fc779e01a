//! Usage listing built from the command registry

use crate::registry::COMMANDS;
use crate::utils::terminal::Palette;

const HEADER: &str = "\n\tEugene multifunctional script\n\t=============================\n\n";

/// Render every registered command and its sub-flags, each name in the
/// next palette colour
pub fn render_usage(palette: &mut Palette) -> String {
    let mut usage = String::from(HEADER);
    for spec in COMMANDS {
        let name = palette.next_style().apply_to(spec.name);
        usage.push_str(&format!("\t• {} is used to {}\n", name, spec.description));
        for subcommand in spec.subcommands {
            usage.push_str(&format!("\t\t - {}\n", subcommand));
        }
    }
    usage
}

pub fn print_usage(palette: &mut Palette) {
    println!("{}", render_usage(palette));
}
