/// Two-step delete: [`open`](DeletePrompt::open) shows the confirmation,
/// [`confirm`](DeletePrompt::confirm) hands back the product id to delete and
/// closes the prompt. Nothing is deleted unless `confirm` returns `Some`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DeletePrompt {
    target: Option<String>,
}

impl DeletePrompt {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&mut self, product_id: &str) {
        self.target = Some(product_id.to_string());
    }

    pub fn is_open(&self) -> bool {
        self.target.is_some()
    }

    pub fn cancel(&mut self) {
        self.target = None;
    }

    pub fn confirm(&mut self) -> Option<String> {
        self.target.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confirm_without_open_deletes_nothing() {
        let mut prompt = DeletePrompt::new();
        assert!(!prompt.is_open());
        assert_eq!(prompt.confirm(), None);
    }

    #[test]
    fn test_cancel_deletes_nothing() {
        let mut prompt = DeletePrompt::new();
        prompt.open("p1");
        prompt.cancel();
        assert_eq!(prompt.confirm(), None);
    }

    #[test]
    fn test_confirm_yields_target_once() {
        let mut prompt = DeletePrompt::new();
        prompt.open("p1");
        assert!(prompt.is_open());
        assert_eq!(prompt.confirm().as_deref(), Some("p1"));
        assert!(!prompt.is_open());
        assert_eq!(prompt.confirm(), None);
    }
}
