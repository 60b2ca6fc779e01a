//! Terminal output utilities

use console::{style, Color, Style};

/// Print an error message to stderr
pub fn print_error(message: &str) {
    eprintln!("{}: {}", style("error").red().bold(), message);
}

/// Print a warning message to stderr
pub fn print_warning(message: &str) {
    eprintln!("{}: {}", style("warning").yellow().bold(), message);
}

/// Print an info message
pub fn print_info(message: &str) {
    println!("{}: {}", style("info").blue().bold(), message);
}

const ROTATION: [Color; 5] = [
    Color::Green,
    Color::Yellow,
    Color::Blue,
    Color::Magenta,
    Color::Cyan,
];

/// Colour rotation used by banners and the usage listing.
///
/// Two consecutive calls to [`Palette::next_style`] never return the same
/// colour.
#[derive(Debug, Default)]
pub struct Palette {
    index: usize,
}

impl Palette {
    /// Create a palette starting at the first colour
    pub fn new() -> Self {
        Self::default()
    }

    /// Next colour in the rotation
    pub fn next_color(&mut self) -> Color {
        let color = ROTATION[self.index % ROTATION.len()];
        self.index = self.index.wrapping_add(1);
        color
    }

    /// Next colour as a console style
    pub fn next_style(&mut self) -> Style {
        Style::new().fg(self.next_color())
    }

    /// Print a step banner: ` > message` in the next colour
    pub fn print_style(&mut self, message: &str) {
        println!("\n{}\n", self.next_style().apply_to(format!(" > {}", message)));
    }
}
