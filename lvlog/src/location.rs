/// Source location of the code that issued a log call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location {
    file: &'static str,
    line: u32,
}

impl Location {
    pub const fn new(file: &'static str, line: u32) -> Self {
        Self { file, line }
    }

    /// Placeholder used when no call site is available.
    pub const fn unknown() -> Self {
        Self {
            file: "unknown",
            line: 0,
        }
    }

    /// Call site of the outermost `#[track_caller]` frame.
    #[track_caller]
    pub fn caller() -> Self {
        let caller = std::panic::Location::caller();
        Self::new(caller.file(), caller.line())
    }

    pub fn file(&self) -> &'static str {
        self.file
    }

    pub fn line(&self) -> u32 {
        self.line
    }

    /// File name with the directory part stripped.
    pub fn basename(&self) -> &'static str {
        match self.file.rsplit(['/', '\\']).next() {
            Some(name) if !name.is_empty() => name,
            _ => "unknown",
        }
    }
}

impl Default for Location {
    fn default() -> Self {
        Self::unknown()
    }
}
