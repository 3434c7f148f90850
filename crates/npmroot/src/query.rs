/// What to look for: a package name and, optionally, one of its executables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageQuery {
    package_name:    String,
    executable_name: Option<String>,
}

impl PackageQuery {
    pub fn new(package_name: impl Into<String>) -> Self {
        Self {
            package_name:    package_name.into(),
            executable_name: None,
        }
    }

    pub fn with_executable(mut self, executable_name: impl Into<String>) -> Self {
        let executable_name = executable_name.into();
        self.executable_name = (!executable_name.is_empty()).then_some(executable_name);
        self
    }

    pub fn package_name(&self) -> &str { &self.package_name }

    pub fn executable_name(&self) -> Option<&str> { self.executable_name.as_deref() }
}
