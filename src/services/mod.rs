pub mod classroom_service;
pub mod common_students_service;
pub mod existence_service;
pub mod notification_service;

#[cfg(test)]
pub mod test_support;
