use axum::{http::StatusCode, response::Html};
use const_format::concatcp;
use horrorshow::{helper::doctype, html, Raw, RenderOnce, Template, TemplateBuffer};

pub mod ack;

const STYLE: &str = concatcp!(shared_data::BASE_STYLE, shared_data::MENU_STYLE);

const DROPDOWN_SCRIPT: &str = r#"
function toggleMenu() {
	document.getElementById("menu-dropdown").classList.toggle("show");
}

window.onclick = function(event) {
	if (!event.target.matches('.dropbtn')) {
		var dropdowns = document.getElementsByClassName("dropdown-content");
		for (var i = 0; i < dropdowns.length; i++) {
			dropdowns[i].classList.remove('show');
		}
	}
}
"#;

// One entry per item in the top menu; the mobile dropdown reuses the same list.
const MENU: &[(&str, &str)] = &[
	("home", "/index.htm"),
	("shows", "https://tickets.theatrefest.co.uk/program/show"),
	("times", "https://tickets.theatrefest.co.uk/program/schedule"),
	("venues", "https://tickets.theatrefest.co.uk/program/venue"),
	("tickets", "/booking.htm"),
	("performers", "/performers.htm"),
	("volunteer", "/volunteers.htm"),
	("contact", "/contact.htm"),
	("my account", "https://tickets.theatrefest.co.uk/tickets/myaccount"),
];

/// The fixed frame every page of the site sits in: bridge artwork linking
/// home, the menu bar (with its mobile dropdown twin), and a content block.
pub struct PageShell<C: RenderOnce + 'static> {
	pub title: &'static str,
	pub content: C
}

impl<C> RenderOnce for PageShell<C> where C: RenderOnce + 'static {
	fn render_once(self, tmpl: &mut TemplateBuffer) {
		tmpl << html! {
			: doctype::HTML;
			html(lang = "en") {
				head {
					title : self.title;
					meta(name = "viewport", content = "width=device-width, initial-scale=1");
					style : Raw(STYLE);
					script : Raw(DROPDOWN_SCRIPT);
				}
				body {
					div(id = "holder") {
						div(id = "bridge") {
							a(href = "/index.htm") {
								img(src = "/art/bridge.png", alt = "");
							}
						}
						div(id = "bridgemobile") {
							a(href = "/index.htm") {
								img(src = "/art/bridge-mobile.png", alt = "");
							}
						}
						div(id = "menubar") {}
						div(id = "topmenu") {
							ul {
								@ for (name, href) in MENU {
									li { a(href = *href) : *name; }
								}
							}
						}
						div(id = "topminimenu") {
							div(class = "dropdown") {
								button(onclick = "toggleMenu()", class = "dropbtn") {}
								div(id = "menu-dropdown", class = "dropdown-content") {
									ul {
										@ for (name, href) in MENU {
											li { a(href = *href) : *name; }
										}
									}
								}
							}
						}
						div(id = "response") : self.content;
					}
				}
			}
		}
	}
}

struct MissingPage;

impl RenderOnce for MissingPage {
	fn render_once(self, tmpl: &mut TemplateBuffer) {
		tmpl << html! {
			p : "We can't find that page.";
			p {
				a(href = "/index.htm") { b : "click" }
				: " to return to the home page";
			}
		}
	}
}

pub async fn not_found() -> (StatusCode, Html<String>) {
	(
		StatusCode::NOT_FOUND,
		Html(PageShell { title: "page not found", content: MissingPage }.into_string().unwrap())
	)
}
