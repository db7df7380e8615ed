use serde::Serialize;

#[derive(Serialize)]
pub struct Message {
    message: String,
}

impl Message {
    pub fn new<T: Into<String>>(message: T) -> Self {
        Self {
            message: message.into(),
        }
    }
}
