use clap::Args;
use contact_form_models::field::FormFields;

pub mod submit;
pub mod validate;

/// Values of the contact form fields
#[derive(Debug, Clone, Args)]
pub struct FormArgs {
    /// Full name of the sender
    #[arg(long, default_value = "")]
    pub name: String,
    /// Email address of the sender
    #[arg(long, default_value = "")]
    pub email: String,
    /// Subject of the message
    #[arg(long, default_value = "")]
    pub subject: String,
    /// Content of the message
    #[arg(long, default_value = "")]
    pub message: String,
}

impl From<FormArgs> for FormFields {
    fn from(value: FormArgs) -> Self {
        Self {
            name: value.name,
            email: value.email,
            subject: value.subject,
            message: value.message,
        }
    }
}
