//! Notification composition.
//!
//! Builds the two outbound messages this service sends. Submitted values
//! are interpolated into the HTML bodies verbatim; recipients are the
//! submitters' own addresses.

use voiceform_core::models::{FormSubmission, NotificationMessage, StoredFile};

pub const AUDIO_CONFIRMATION_SUBJECT: &str = "Audio Submission Confirmation";
pub const FORM_RESPONSE_SUBJECT: &str = "Form Response";

/// Confirmation for an audio submission, with the stored file attached.
pub fn audio_confirmation(
    from: &str,
    to: &str,
    is_agreed: bool,
    file: &StoredFile,
) -> NotificationMessage {
    let agreement = if is_agreed { "Agreed" } else { "Not Agreed" };
    let html_body = format!(
        "<h2>Thank you for your audio submission</h2>\n\
         <p>We have received your audio file submission. Here are the details:</p>\n\
         <p><strong>Email:</strong> {email}</p>\n\
         <p><strong>Agreement Status:</strong> {agreement}</p>\n\
         <p><strong>File Details:</strong></p>\n\
         <ul>\n\
             <li>Filename: {filename}</li>\n\
             <li>Size: {size} KB</li>\n\
             <li>Type: {mime_type}</li>\n\
         </ul>\n\
         <p>Your audio file is attached to this email.</p>",
        email = to,
        agreement = agreement,
        filename = file.original_name,
        size = file.size_in_kb(),
        mime_type = file.mime_type,
    );

    NotificationMessage {
        from: from.to_string(),
        to: to.to_string(),
        subject: AUDIO_CONFIRMATION_SUBJECT.to_string(),
        html_body,
        attachments: vec![file.clone()],
    }
}

/// Response for a generic form submission. The heading comes from the
/// form name: `patient-intake` becomes `Patient Intake Form Submission
/// Details`. The handler guarantees `email` and `form_name` are present.
pub fn form_response(from: &str, submission: &FormSubmission) -> NotificationMessage {
    let to = submission.email.clone().unwrap_or_default();
    let form_name = submission.form_name.as_deref().unwrap_or_default();

    let html_body = format!(
        "<h2>{title} Form Submission Details</h2>\n\
         <p>{cancer_type}</p>\n\
         <p>{condition}</p>\n\
         <p>{reason}</p>\n\
         <p><strong>Full Name:</strong> {full_name}</p>\n\
         <p><strong>Phone:</strong> {phone}</p>\n\
         <p><strong>Email:</strong> {email}</p>",
        title = title_from_form_name(form_name),
        cancer_type = submission.cancer_type.as_deref().unwrap_or_default(),
        condition = submission.condition.as_deref().unwrap_or_default(),
        reason = submission.reason.as_deref().unwrap_or_default(),
        full_name = submission.full_name.as_deref().unwrap_or_default(),
        phone = submission.phone.as_deref().unwrap_or_default(),
        email = to,
    );

    NotificationMessage {
        from: from.to_string(),
        to,
        subject: FORM_RESPONSE_SUBJECT.to_string(),
        html_body,
        attachments: Vec::new(),
    }
}

/// `"patient-intake"` -> `"Patient Intake"`: split on `-`, uppercase each
/// word's first letter, rejoin with spaces.
fn title_from_form_name(form_name: &str) -> String {
    form_name
        .split('-')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
