use yew::prelude::*;
use yew::virtual_dom::AttrValue;

/// Renders an admin-authored rich-text field verbatim.
///
/// The content originates from the trusted back-office pipeline, never from
/// end users; if that provenance ever changes this is the single seam where
/// a sanitize step belongs.
pub fn rich_text(source: &str) -> Html {
    html! {
        <div class="prose">
            { Html::from_html_unchecked(AttrValue::from(source.to_string())) }
        </div>
    }
}
