use scraper::ElementRef;

pub fn extract_text(node: ElementRef) -> String {
    node.text().collect::<String>()
}

pub fn extract_attr(node: ElementRef, attr: &str) -> Option<String> {
    node.value().attr(attr).map(str::to_string)
}
