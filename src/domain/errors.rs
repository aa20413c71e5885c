use custom_error::custom_error;

custom_error! {
/// Submitted form data missing a required field.
///
/// The message is returned verbatim to the client.
#[derive(PartialEq, Eq)]
pub MalformedInput
    MissingEmail = "Email is required",
    MissingContactFields = "All fields are required",
}
