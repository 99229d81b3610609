//! HTML rendering of a [`Page`].
//!
//! Output is a self-contained document using Tailwind utility classes. Icons
//! are emitted as `<i data-icon="...">` placeholders. All card text goes
//! through [`escape`].

use crate::app::Tab;
use crate::component::{Artwork, CardView, ADD_LABEL, FOR_TRADE_LABEL};
use crate::view::{CollectionContent, EmptyState, Header, Main, NavTab, Page, Panel, LOADING_TEXT};

/// Escape text for use in element content and quoted attribute values.
pub fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

fn icon(name: &str, class: &str) -> String {
    format!("<i data-icon=\"{}\" class=\"{}\"></i>", name, class)
}

pub fn render_page(page: &Page) -> String {
    let mut out = String::new();
    out.push_str("<!doctype html><html><head><meta charset=\"utf-8\">");
    out.push_str(&format!("<title>{}</title></head>", escape(page.header.brand)));
    out.push_str("<body class=\"min-h-screen bg-gradient-to-br from-yellow-300 via-yellow-400 to-orange-400\">");
    out.push_str(&render_header(&page.header));
    out.push_str(&render_nav(&page.nav));
    out.push_str("<main class=\"max-w-7xl mx-auto px-4 py-8\">");
    out.push_str(&render_main(&page.main));
    out.push_str("</main>");
    out.push_str(&format!(
        "<footer class=\"bg-black text-white mt-16\">{}<span class=\"font-bold text-yellow-400\">{}</span><p class=\"text-gray-400 text-sm\">{}</p></footer>",
        icon("zap", "w-6 h-6 text-yellow-400"),
        escape(page.header.brand),
        escape(page.footer)
    ));
    out.push_str("</body></html>");
    out
}

fn render_header(header: &Header) -> String {
    format!(
        "<header class=\"bg-black text-white shadow-2xl\">\
<div class=\"flex items-center gap-3\">{}<div><h1 class=\"text-3xl font-bold\">{}</h1><p class=\"text-yellow-400 text-sm\">{}</p></div></div>\
<div class=\"flex items-center gap-6\">\
<div class=\"bg-yellow-400 text-black px-4 py-2 rounded-full font-bold\">{}<span>{} Cards</span></div>\
<div class=\"bg-red-600 px-4 py-2 rounded-full font-bold\">{}<span>{}</span></div>\
</div></header>",
        icon("zap", "w-8 h-8 text-black"),
        escape(header.brand),
        escape(header.tagline),
        icon("trophy", "w-5 h-5"),
        header.collection_count,
        icon("users", "w-5 h-5"),
        escape(header.trading_badge),
    )
}

fn render_nav(tabs: &[NavTab]) -> String {
    let mut out = String::from("<nav class=\"bg-white shadow-md\"><div class=\"flex gap-1\">");
    for t in tabs {
        let class = if t.active {
            "bg-yellow-400 text-black border-b-4 border-red-600"
        } else {
            "text-gray-600 hover:bg-yellow-50"
        };
        let icon_name = match t.tab {
            Tab::Market => "sparkles",
            Tab::Collection => "trophy",
        };
        out.push_str(&format!(
            "<button data-tab=\"{}\" class=\"flex-1 py-4 px-6 font-bold {}\"{}>{}{}</button>",
            t.tab,
            class,
            if t.active { " aria-current=\"page\"" } else { "" },
            icon(icon_name, "w-5 h-5"),
            escape(t.label)
        ));
    }
    out.push_str("</div></nav>");
    out
}

fn render_main(main: &Main) -> String {
    match main {
        Main::Loading => format!(
            "<div class=\"flex items-center justify-center h-64\" data-state=\"loading\">{}<p class=\"text-xl font-bold text-black\">{}</p></div>",
            icon("zap", "w-16 h-16 text-yellow-600 animate-bounce"),
            escape(LOADING_TEXT)
        ),
        Main::Market { welcome, cards } => {
            let mut out = render_panel(welcome);
            out.push_str(&render_grid(cards));
            out
        }
        Main::Collection { welcome, content } => {
            let mut out = render_panel(welcome);
            match content {
                CollectionContent::Empty(empty) => out.push_str(&render_empty(empty)),
                CollectionContent::Grid(cards) => out.push_str(&render_grid(cards)),
            }
            out
        }
    }
}

fn render_panel(panel: &Panel) -> String {
    format!(
        "<div class=\"mb-6 bg-white rounded-lg p-6 shadow-lg\"><h2 class=\"text-2xl font-bold text-gray-800 mb-2\">{}</h2><p class=\"text-gray-600\">{}</p></div>",
        escape(panel.title),
        escape(panel.body)
    )
}

fn render_empty(empty: &EmptyState) -> String {
    format!(
        "<div class=\"bg-white rounded-lg p-12 shadow-lg text-center\" data-state=\"empty\">{}<h3 class=\"text-xl font-bold text-gray-800 mb-2\">{}</h3><p class=\"text-gray-600 mb-4\">{}</p><button data-tab=\"{}\" class=\"bg-yellow-400 text-black font-bold py-3 px-6 rounded-lg\">{}</button></div>",
        icon("trophy", "w-16 h-16 text-yellow-500 mx-auto mb-4"),
        escape(empty.title),
        escape(empty.body),
        empty.button_target,
        escape(empty.button_label)
    )
}

fn render_grid(cards: &[CardView]) -> String {
    let mut out = String::from("<div class=\"grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6\">");
    for card in cards {
        out.push_str(&render_card(card));
    }
    out.push_str("</div>");
    out
}

pub fn render_card(card: &CardView) -> String {
    let id = escape(&card.card_id);
    let mut out = format!(
        "<div class=\"relative bg-white rounded-xl shadow-lg overflow-hidden border-8 border-black\" data-card-id=\"{}\">",
        id
    );
    out.push_str(&format!("<div class=\"h-2 {}\"></div>", card.type_color));
    out.push_str("<div class=\"p-4\">");
    out.push_str(&format!(
        "<div class=\"flex justify-between items-start mb-3\"><h3 class=\"text-xl font-bold text-gray-800\">{}</h3><div class=\"flex items-center gap-1 text-red-600\">{}<span class=\"font-bold\">{}</span></div></div>",
        escape(&card.name),
        icon("heart", "w-4 h-4"),
        card.hp
    ));

    out.push_str("<div class=\"aspect-square bg-gradient-to-br from-yellow-100 to-yellow-200 rounded-lg mb-3\">");
    match &card.artwork {
        Artwork::Image { src, alt } => out.push_str(&format!(
            "<img src=\"{}\" alt=\"{}\" class=\"w-full h-full object-cover\">",
            escape(src),
            escape(alt)
        )),
        Artwork::Placeholder => out.push_str(&icon("zap", "w-20 h-20 text-yellow-500")),
    }
    out.push_str("</div>");

    out.push_str(&format!(
        "<div class=\"flex justify-between items-center mb-2\"><span class=\"px-3 py-1 rounded-full text-sm font-semibold {} text-white\">{}</span><span class=\"text-sm font-bold {}\">{}</span></div>",
        card.type_color,
        escape(&card.type_label),
        card.rarity_color,
        escape(&card.rarity_label)
    ));

    if let Some(own) = &card.ownership {
        out.push_str(&format!(
            "<div class=\"flex items-center justify-between mt-3 pt-3 border-t border-gray-200\"><span class=\"text-sm text-gray-600\">Owned: {}</span>",
            own.quantity
        ));
        if own.for_trade {
            out.push_str(&format!(
                "<span class=\"px-2 py-1 bg-green-100 text-green-700 text-xs rounded-full font-semibold\">{}</span>",
                FOR_TRADE_LABEL
            ));
        }
        out.push_str("</div>");
    }

    if card.add_action {
        out.push_str(&format!(
            "<button data-action=\"add-to-collection\" data-card-id=\"{}\" class=\"w-full mt-3 bg-yellow-400 text-black font-bold py-2 px-4 rounded-lg\">{}</button>",
            id, ADD_LABEL
        ));
    }

    out.push_str("</div></div>");
    out
}
