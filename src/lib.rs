pub mod estimation;
pub mod rendering;
pub mod tasks;
pub mod ui;

#[cfg(any(test, feature = "test-support"))]
pub mod testing;
