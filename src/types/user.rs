/// Row handed to the store on insert. The id is minted by the caller.
#[derive(Debug, Clone)]
pub struct DBUserCreate {
    pub id: String,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role: String,
}

/// Full overwrite of every mutable column.
#[derive(Debug, Clone)]
pub struct DBUserUpdate {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role: String,
}
