//! 浏览器对话框与打印

use planificador::collection::Prompt;
use wasm_bindgen::JsCast;

/// `window.confirm` / `window.alert`
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserPrompt;

impl Prompt for BrowserPrompt {
    fn confirm(&self, message: &str) -> bool {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }

    fn alert(&self, message: &str) {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
}

const PRINT_STYLE_ID: &str = "planificador-print-style";

/// 只打印指定 id 的子树
///
/// 注入一段 `@media print` 样式隐藏其他内容，然后调用 `window.print()`。
pub fn print_section(root_id: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };

    if document.get_element_by_id(PRINT_STYLE_ID).is_none() {
        let css = format!(
            "@media print {{ body * {{ visibility: hidden; }} \
             #{id}, #{id} * {{ visibility: visible; }} \
             #{id} {{ position: absolute; left: 0; top: 0; width: 100%; }} }}",
            id = root_id
        );
        let style = document
            .create_element("style")
            .ok()
            .and_then(|el| el.dyn_into::<web_sys::HtmlStyleElement>().ok());
        if let (Some(style), Some(head)) = (style, document.head()) {
            style.set_id(PRINT_STYLE_ID);
            style.set_text_content(Some(&css));
            let _ = head.append_child(&style);
        }
    }

    if let Err(e) = window.print() {
        log::error!("print failed: {:?}", e);
    }
}
