use std::fmt;

/// Named size bucket for a uniform scale factor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SizeClass {
    Tiny,
    Fit,
    Fat,
}

impl SizeClass {
    /// `<= 0.5` tiny, `(0.5, 1.0)` fit, `>= 1.0` fat
    pub fn classify(scale: f32) -> Self {
        if scale <= 0.5 {
            SizeClass::Tiny
        } else if scale < 1.0 {
            SizeClass::Fit
        } else {
            SizeClass::Fat
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SizeClass::Tiny => "tiny",
            SizeClass::Fit => "fit",
            SizeClass::Fat => "fat",
        }
    }
}

impl fmt::Display for SizeClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// User-facing line, e.g. `Dera# 3 is fit!`
pub fn status_message(display_name: &str, index: u64, size: SizeClass) -> String {
    format!("{display_name}# {index} is {size}!")
}
