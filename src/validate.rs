use validator::Validate;

use crate::error::ApiError;

/// Run the declared field rules on a request body before any database access.
/// Failures are flattened into one `"<message>: <field>"` segment per failing
/// rule, joined with `", "`, and returned as a single 400. The validator
/// reports fields as a map, so segments are ordered by field name to keep the
/// joined message stable.
pub fn check<T: Validate>(input: &T) -> Result<(), ApiError> {
    input.validate().map_err(|errors| {
        let mut field_errors: Vec<_> = errors.field_errors().into_iter().collect();
        field_errors.sort_by_key(|(field, _)| *field);

        let joined = field_errors
            .iter()
            .flat_map(|(field, field_errors)| {
                field_errors.iter().map(move |e| {
                    let message = e
                        .message
                        .as_ref()
                        .map(|m| m.as_ref().to_string())
                        .unwrap_or_else(|| format!("invalid {}", e.code));
                    format!("{}: {}", message, field)
                })
            })
            .collect::<Vec<_>>()
            .join(", ");
        ApiError::validation(joined)
    })
}
