/// Confirmation flow for a destructive action on `T`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteFlow<T> {
    None,
    Confirming(T),
    Deleting(T),
}

impl<T> Default for DeleteFlow<T> {
    fn default() -> Self {
        DeleteFlow::None
    }
}

impl<T> DeleteFlow<T> {
    pub fn request(&mut self, target: T) {
        if !self.is_deleting() {
            *self = DeleteFlow::Confirming(target);
        }
    }

    /// Dismisses the confirmation. Returns false while a delete is in flight.
    pub fn cancel(&mut self) -> bool {
        if self.is_deleting() {
            return false;
        }
        *self = DeleteFlow::None;
        true
    }

    /// Moves `Confirming` to `Deleting` and hands back the target.
    pub fn begin(&mut self) -> Option<&T> {
        match std::mem::take(self) {
            DeleteFlow::Confirming(target) => {
                *self = DeleteFlow::Deleting(target);
                self.target()
            }
            other => {
                *self = other;
                None
            }
        }
    }

    pub fn finish(&mut self) {
        *self = DeleteFlow::None;
    }

    pub fn target(&self) -> Option<&T> {
        match self {
            DeleteFlow::Confirming(target) | DeleteFlow::Deleting(target) => Some(target),
            DeleteFlow::None => None,
        }
    }

    pub fn is_open(&self) -> bool {
        !matches!(self, DeleteFlow::None)
    }

    pub fn is_deleting(&self) -> bool {
        matches!(self, DeleteFlow::Deleting(_))
    }
}
