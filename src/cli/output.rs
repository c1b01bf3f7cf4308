use colored::*;

pub struct OutputFormatter {
    use_colors: bool,
    verbose: bool,
}

impl OutputFormatter {
    pub fn new(use_colors: bool, verbose: bool) -> Self {
        Self { use_colors, verbose }
    }

    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    pub fn print_lines(&self, lines: &[String]) {
        for line in lines {
            println!("{}", line);
        }

        if self.verbose {
            self.print_detail(&format!("{} lines", lines.len()));
        }
    }

    pub fn print_detail(&self, text: &str) {
        if self.use_colors {
            eprintln!("  {}", text.bright_black());
        } else {
            eprintln!("  {}", text);
        }
    }

    pub fn print_header(&self, text: &str) {
        if self.use_colors {
            println!("{}", text.bright_green().bold());
        } else {
            println!("{}", text);
            println!("{}", "=".repeat(text.len()));
        }
    }

    pub fn print_info(&self, text: &str) {
        if self.use_colors {
            println!("{}", text.bright_blue());
        } else {
            println!("{}", text);
        }
    }

    pub fn print_success(&self, text: &str) {
        if self.use_colors {
            println!("{} {}", "✓".green(), text.green());
        } else {
            println!("[SUCCESS] {}", text);
        }
    }

    pub fn print_error(&self, text: &str) {
        if self.use_colors {
            eprintln!("{} {}", "✗".red(), text.red());
        } else {
            eprintln!("[ERROR] {}", text);
        }
    }

    pub fn print_warning(&self, text: &str) {
        if self.use_colors {
            println!("{} {}", "⚠".yellow(), text.yellow());
        } else {
            println!("[WARNING] {}", text);
        }
    }
}
