use crate::{FailureKind, FailureMetadata};
use std::any::{TypeId, type_name};

/// Assertions on a [`TypeId`].
#[derive(Debug, Clone)]
pub struct ClassSubject {
    metadata: FailureMetadata,
    actual: TypeId,
}

impl ClassSubject {
    pub fn new(metadata: FailureMetadata, actual: TypeId) -> Self {
        ClassSubject { metadata, actual }
    }

    #[track_caller]
    pub fn is_type<T: ?Sized + 'static>(&self) {
        if self.actual != TypeId::of::<T>() {
            self.metadata
                .fail(FailureKind::Type, format!("{:?}", self.actual), type_name::<T>());
        }
    }

    #[track_caller]
    pub fn is_not_type<T: ?Sized + 'static>(&self) {
        if self.actual == TypeId::of::<T>() {
            self.metadata.fail(
                FailureKind::Type,
                type_name::<T>(),
                format!("any type but {}", type_name::<T>()),
            );
        }
    }
}
