// ==================== CLASSROOM OPERATIONS ====================
// One function per API operation. Each runs the same pipeline:
// email format -> teacher existence -> student existence -> operation.
// Nothing is written before every check has passed.

use crate::{
    models::{CommonStudentsResponse, RecipientsResponse},
    services::{
        common_students_service::resolve_common_students,
        existence_service::{ensure_students_exist, ensure_teachers_exist},
        notification_service::{resolve_recipients, Notification},
    },
    store::{EntityKind, EntityStore},
    utils::{
        email::{unique_emails, validate_email_format, validate_email_formats},
        error::AppError,
    },
};

/// POST /api/register - Registers students to an existing teacher
pub async fn register_students(
    store: &dyn EntityStore,
    teacher_email: &str,
    student_emails: &[String],
) -> Result<(), AppError> {
    let students = unique_emails(student_emails);

    validate_email_formats(&students)?;
    validate_email_format(teacher_email)?;

    ensure_teachers_exist(store, &[teacher_email.to_string()]).await?;
    ensure_students_exist(store, &students).await?;

    store.register_students(teacher_email, &students).await?;

    log::info!("✅ Registered {} student(s) to {}", students.len(), teacher_email);
    Ok(())
}

/// POST /api/suspend - Marks an existing student as suspended
pub async fn suspend_student(store: &dyn EntityStore, student_email: &str) -> Result<(), AppError> {
    validate_email_format(student_email)?;
    ensure_students_exist(store, &[student_email.to_string()]).await?;

    store.update_student(student_email, true).await?;

    log::info!("✅ Suspended student {}", student_email);
    Ok(())
}

/// GET /api/commonstudents - Students registered to all of the given teachers
pub async fn retrieve_common_students(
    store: &dyn EntityStore,
    teacher_emails: &[String],
) -> Result<CommonStudentsResponse, AppError> {
    let teachers = unique_emails(teacher_emails);

    validate_email_formats(&teachers)?;
    ensure_teachers_exist(store, &teachers).await?;

    let students = resolve_common_students(store, &teachers).await?;
    Ok(CommonStudentsResponse { students })
}

/// POST /api/retrievefornotifications - Recipients of a teacher's notification
pub async fn retrieve_recipients(
    store: &dyn EntityStore,
    teacher_email: &str,
    notification_text: &str,
) -> Result<RecipientsResponse, AppError> {
    validate_email_format(teacher_email)?;
    ensure_teachers_exist(store, &[teacher_email.to_string()]).await?;

    let notification = Notification::parse(teacher_email, notification_text);
    ensure_students_exist(store, &notification.mentions).await?;

    let recipients = resolve_recipients(store, &notification).await?;
    Ok(RecipientsResponse { recipients })
}

async fn populate(store: &dyn EntityStore, kind: EntityKind, emails: &[String]) -> Result<(), AppError> {
    let emails = unique_emails(emails);
    validate_email_formats(&emails)?;

    store.create_if_not_exists(kind, &emails).await?;

    log::info!("✅ Ensured {} {}(s) exist", emails.len(), kind.noun().to_lowercase());
    Ok(())
}

/// POST /api/populateteachers - Creates teachers that do not exist yet
pub async fn populate_teachers(store: &dyn EntityStore, teacher_emails: &[String]) -> Result<(), AppError> {
    populate(store, EntityKind::Teacher, teacher_emails).await
}

/// POST /api/populatestudents - Creates students that do not exist yet
pub async fn populate_students(store: &dyn EntityStore, student_emails: &[String]) -> Result<(), AppError> {
    populate(store, EntityKind::Student, student_emails).await
}

/// DELETE /api/clear - Deletes every registration, student and teacher
pub async fn clear_database(store: &dyn EntityStore) -> Result<(), AppError> {
    store.clear_all().await?;
    log::info!("🗑️  Database cleared");
    Ok(())
}
