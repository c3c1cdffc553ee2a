/// Generates a client side request correlation id.
///
/// Each outgoing request carries one of these in the `X-Client-Request-Id`
/// header so client logs can be matched against server logs. The id is a
/// 24-character lowercase alphanumeric string from the `nanoid` crate,
/// random enough that collisions are not a practical concern.
///
/// # Examples
/// ```
/// use financeanalyst_client::utils::id::request_id;
/// let id = request_id();
/// assert_eq!(id.len(), 24);
/// ```
pub fn request_id() -> String {
    let alphabet: Vec<char> = "abcdefghijklmnopqrstuvwxyz0123456789".chars().collect();
    nanoid::nanoid!(24, &alphabet)
}
