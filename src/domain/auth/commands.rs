use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Login {
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Register {
    pub email: Option<String>,
    pub password: Option<String>,
}
