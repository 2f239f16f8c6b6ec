/// Identifies one issued fetch; compared against the newest issued token on completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestToken(u64);

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestTokens {
    latest: u64,
}

impl RequestTokens {
    pub fn issue(&mut self) -> RequestToken {
        self.latest = self.latest.wrapping_add(1);
        RequestToken(self.latest)
    }

    pub fn is_current(&self, token: RequestToken) -> bool {
        token.0 == self.latest
    }
}
