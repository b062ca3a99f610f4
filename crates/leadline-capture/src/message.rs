//! Hand-off message formatting.

use leadline_core::LeadRecord;

/// Renders the dynamic hand-off message for one captured lead.
///
/// A deterministic template: the same record always yields the same
/// text, with `"Not specified"` / `"No additional message"` standing
/// in for absent optional fields.
pub fn format_handoff_message(record: &LeadRecord) -> String {
    format!(
        "Hello! I'm sending you a message from the Leadline clinic website.\n\
         \n\
         Name: {name}\n\
         Email: {email}\n\
         Phone: {phone}\n\
         Condition: {condition}\n\
         Message: {message}\n\
         \n\
         Please get back to me at your earliest convenience.\n\
         \n\
         Thank you!",
        name = record.name,
        email = record.email,
        phone = record.phone,
        condition = record.condition_label(),
        message = record.message_or_default(),
    )
}
