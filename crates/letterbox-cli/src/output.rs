use console::style;
use letterbox_core::Dimensions;
use std::path::Path;

/// Output formatter with colored messages
pub struct OutputFormatter {
    colored: bool,
}

impl OutputFormatter {
    pub fn new(colored: bool) -> Self {
        Self { colored }
    }

    /// Print success message
    pub fn success(&self, message: &str) {
        if self.colored {
            println!("{} {}", style("✓").green().bold(), message);
        } else {
            println!("[SUCCESS] {}", message);
        }
    }

    /// Print error message
    pub fn error(&self, message: &str) {
        if self.colored {
            eprintln!("{} {}", style("✗").red().bold(), message);
        } else {
            eprintln!("[ERROR] {}", message);
        }
    }

    /// Print warning message
    pub fn warn(&self, message: &str) {
        if self.colored {
            println!("{} {}", style("⚠").yellow().bold(), message);
        } else {
            println!("[WARN] {}", message);
        }
    }

    /// Print info message
    pub fn info(&self, message: &str) {
        if self.colored {
            println!("{} {}", style("ℹ").cyan(), message);
        } else {
            println!("[INFO] {}", message);
        }
    }

    /// Format file path
    pub fn format_path(&self, path: &Path) -> String {
        if self.colored {
            style(path.display()).cyan().to_string()
        } else {
            path.display().to_string()
        }
    }

    /// Format file size
    pub fn format_size(&self, bytes: usize) -> String {
        let size_str = if bytes < 1024 {
            format!("{} B", bytes)
        } else if bytes < 1024 * 1024 {
            format!("{:.1} KB", bytes as f64 / 1024.0)
        } else if bytes < 1024 * 1024 * 1024 {
            format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
        } else {
            format!("{:.1} GB", bytes as f64 / (1024.0 * 1024.0 * 1024.0))
        };

        if self.colored {
            style(size_str).yellow().to_string()
        } else {
            size_str
        }
    }

    /// Format size reduction percentage
    pub fn format_reduction(&self, original: usize, compressed: usize) -> String {
        let percent = if original == 0 {
            0.0
        } else {
            (1.0 - compressed as f64 / original as f64) * 100.0
        };
        let reduction_str = format!("{:.1}%", percent);

        if self.colored {
            if percent > 0.0 {
                style(reduction_str).green().to_string()
            } else {
                style(reduction_str).yellow().to_string()
            }
        } else {
            reduction_str
        }
    }

    /// Print compression result
    pub fn print_compression(
        &self,
        input: &Path,
        output: &Path,
        original_size: usize,
        compressed_size: usize,
    ) {
        self.success(&format!(
            "Compressed {} → {} ({} → {}, saved {})",
            self.format_path(input),
            self.format_path(output),
            self.format_size(original_size),
            self.format_size(compressed_size),
            self.format_reduction(original_size, compressed_size)
        ));
    }

    /// Print original image info
    pub fn print_info(&self, input: &Path, size: usize, dims: Dimensions, media_type: &str) {
        self.info(&format!("Name:       {}", self.format_path(input)));
        self.info(&format!("Size:       {}", self.format_size(size)));
        self.info(&format!("Dimensions: {}", dims));
        self.info(&format!("Type:       {}", media_type));
    }
}

impl Default for OutputFormatter {
    fn default() -> Self {
        Self::new(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_size_units() {
        let formatter = OutputFormatter::new(false);
        assert_eq!(formatter.format_size(0), "0 B");
        assert_eq!(formatter.format_size(512), "512 B");
        assert_eq!(formatter.format_size(2048), "2.0 KB");
        assert_eq!(formatter.format_size(5 * 1024 * 1024), "5.0 MB");
    }

    #[test]
    fn test_format_reduction() {
        let formatter = OutputFormatter::new(false);
        assert_eq!(formatter.format_reduction(1000, 250), "75.0%");
        assert_eq!(formatter.format_reduction(0, 250), "0.0%");
    }
}
