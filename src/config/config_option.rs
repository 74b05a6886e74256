/// A configurable value, with a name for reference and bounds for validation.
#[derive(Clone, Debug)]
pub struct ConfigOption<T> {
    pub name: &'static str,
    pub min: T,
    pub max: T,
    pub value: T,
}

impl<T: Clone> ConfigOption<T> {
    pub fn min_max(&self) -> (T, T) {
        (self.min.clone(), self.max.clone())
    }
}

impl<T: PartialOrd> ConfigOption<T> {
    /// Sets the value of the option, if within the bounds of the option.
    /// Returns true if the value was set, false otherwise.
    pub fn set_bounded(&mut self, value: T) -> bool {
        match self.min <= value && value <= self.max {
            true => {
                self.value = value;
                true
            }
            false => false,
        }
    }
}
