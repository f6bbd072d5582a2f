use anyhow::ensure;
use contact_form_core_impl::validator;
use contact_form_models::field::FormFields;

pub fn validate(fields: FormFields) -> anyhow::Result<()> {
    let validation = validator::validate_all(&fields);

    for result in validation.errors() {
        if let Some(err) = result.error {
            println!("{}: {err}", result.field);
        }
    }

    ensure!(validation.is_valid(), "The form contains invalid fields");
    println!("The form is valid");

    Ok(())
}
