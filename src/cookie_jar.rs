/// Ordered set of name/value cookie pairs, sent back as a single `Cookie` header.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CookieJar {
    cookies: Vec<(String, String)>,
}

impl CookieJar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_response(response: &reqwest::Response) -> Self {
        let mut jar = Self::new();
        for cookie in response.cookies() {
            jar.set(cookie.name(), cookie.value());
        }
        jar
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.cookies
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Replaces the value in place if `name` is already present, otherwise appends.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.cookies.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.cookies.push((name, value)),
        }
    }

    pub fn remove(&mut self, name: &str) -> Option<String> {
        let idx = self.cookies.iter().position(|(n, _)| n == name)?;
        Some(self.cookies.remove(idx).1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.cookies.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.cookies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cookies.is_empty()
    }

    pub fn to_header_value(&self) -> String {
        self.cookies
            .iter()
            .map(|(n, v)| format!("{n}={v}"))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

impl<N: Into<String>, V: Into<String>> FromIterator<(N, V)> for CookieJar {
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        let mut jar = Self::new();
        for (name, value) in iter {
            jar.set(name, value);
        }
        jar
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_replaces_in_place() {
        let mut jar: CookieJar = [("a", "1"), ("b", "2")].into_iter().collect();
        jar.set("a", "3");
        assert_eq!(jar.to_header_value(), "a=3; b=2");
    }

    #[test]
    fn remove_then_set_moves_to_end() {
        let mut jar: CookieJar = [("a", "1"), ("b", "2")].into_iter().collect();
        assert_eq!(jar.remove("a").as_deref(), Some("1"));
        jar.set("a", "9");
        assert_eq!(jar.to_header_value(), "b=2; a=9");
        assert_eq!(jar.remove("missing"), None);
    }

    #[test]
    fn empty_jar_renders_empty_header() {
        let jar = CookieJar::new();
        assert!(jar.is_empty());
        assert_eq!(jar.to_header_value(), "");
    }
}
