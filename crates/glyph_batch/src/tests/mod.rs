//! Cross-module tests covering layout, instance building and merging together

mod batch_properties;
