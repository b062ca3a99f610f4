//! Canned inquiry templates selectable by symbolic key.
//!
//! Templates are fixed strings with no placeholders; only the capture
//! flow's dynamic message is parametrized with lead details.

use leadline_core::Error;
use std::fmt;
use std::str::FromStr;

/// Symbolic key selecting one canned template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateKey {
    /// Schedule a specialty lens fitting
    ScheduleFitting,
    /// Book a corneal imaging session
    BookImaging,
    /// Start the vision therapy program
    StartProgram,
    /// General treatment inquiry
    GeneralInquiry,
    /// Discuss website assessment results
    Assessment,
    /// Book a free consultation
    Consultation,
}

impl TemplateKey {
    /// All keys, in menu order.
    pub const ALL: [TemplateKey; 6] = [
        TemplateKey::ScheduleFitting,
        TemplateKey::BookImaging,
        TemplateKey::StartProgram,
        TemplateKey::GeneralInquiry,
        TemplateKey::Assessment,
        TemplateKey::Consultation,
    ];

    /// Stable kebab-case name for CLI use.
    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateKey::ScheduleFitting => "schedule-fitting",
            TemplateKey::BookImaging => "book-imaging",
            TemplateKey::StartProgram => "start-program",
            TemplateKey::GeneralInquiry => "general-inquiry",
            TemplateKey::Assessment => "assessment",
            TemplateKey::Consultation => "consultation",
        }
    }

    /// The canned message text for this key.
    pub fn canned(&self) -> &'static str {
        match self {
            TemplateKey::ScheduleFitting => {
                "Hi! I would like to schedule a specialty contact lens fitting.\n\n\
                 Could you please help me with:\n\
                 - Available appointment slots\n\
                 - What to bring for the fitting\n\
                 - Duration of the appointment\n\
                 - Consultation fees\n\n\
                 Thank you!"
            }
            TemplateKey::BookImaging => {
                "Hello! I'm interested in booking an advanced corneal imaging session.\n\n\
                 I would like to know:\n\
                 - Available dates and times\n\
                 - Preparation required\n\
                 - Cost of the imaging session\n\
                 - How long the session takes\n\n\
                 Looking forward to hearing from you!"
            }
            TemplateKey::StartProgram => {
                "Hi there! I'm interested in starting your vision therapy program.\n\n\
                 Please provide information about:\n\
                 - Program duration and schedule\n\
                 - What exercises are included\n\
                 - Cost and payment options\n\
                 - How to get started\n\n\
                 Thank you for your time!"
            }
            TemplateKey::GeneralInquiry => {
                "Hi! I'd like to know more about keratoconus treatment and specialty contact lenses.\n\n\
                 Could you please share:\n\
                 - Treatment options available\n\
                 - Success rates and outcomes\n\
                 - Consultation process\n\
                 - Pricing information\n\n\
                 I look forward to your response!"
            }
            TemplateKey::Assessment => {
                "Hello! I just completed the vision assessment on your website and would like to discuss my results.\n\n\
                 Please let me know:\n\
                 - Next steps based on my assessment\n\
                 - Appointment availability\n\
                 - What to expect during consultation\n\
                 - Required documents or tests\n\n\
                 Thank you!"
            }
            TemplateKey::Consultation => {
                "Hi! I would like to book a free consultation.\n\n\
                 Please help me with:\n\
                 - Available consultation slots\n\
                 - What the consultation includes\n\
                 - Duration of the appointment\n\
                 - Location details\n\n\
                 Looking forward to hearing from you!"
            }
        }
    }
}

impl fmt::Display for TemplateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TemplateKey {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        TemplateKey::ALL
            .iter()
            .copied()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| {
                Error::validation_field("template", format!("unknown template key: {s}"))
            })
    }
}
