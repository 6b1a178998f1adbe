use crate::facade::Session;

pub struct ExecutionContext<'a> {
    pub session: &'a mut Session,
}

impl<'a> ExecutionContext<'a> {
    pub fn new(session: &'a mut Session) -> Self {
        Self { session }
    }
}
