use rust_embed::RustEmbed;

#[derive(RustEmbed)]
#[folder = "static/"]
pub struct StaticFiles;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inference_page_is_embedded() {
        let page = StaticFiles::get("html/inference.html").expect("inference page missing");
        let html = String::from_utf8_lossy(&page.data);
        assert!(html.contains("/javascript/inference.js"));
    }

    #[test]
    fn inference_script_is_embedded() {
        assert!(StaticFiles::get("javascript/inference.js").is_some());
    }

    #[test]
    fn inference_script_reports_network_failure() {
        let script = StaticFiles::get("javascript/inference.js").expect("inference script missing");
        let js = String::from_utf8_lossy(&script.data);
        let fetch = js.find("await fetch(").expect("detect request missing");
        let guarded = &js[..fetch];
        assert!(guarded.trim_end().ends_with("try {\n        response ="));
        assert!(js.contains("showError(result, \"Сервер недоступен.\")"));
    }
}
