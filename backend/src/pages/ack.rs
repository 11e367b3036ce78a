use axum::response::Html;
use horrorshow::{html, RenderOnce, Template, TemplateBuffer};
use shared_data::RenderContext;
use tracing::debug;

use super::PageShell;

fn render<C: RenderOnce + 'static>(title: &'static str, content: C) -> Html<String> {
	debug!("Rendering acknowledgement page '{title}'");
	Html(PageShell { title, content }.into_string().unwrap())
}

pub async fn feedback() -> Html<String> {
	render("feedback response", FeedbackThanks { ctx: RenderContext::now() })
}

pub async fn review() -> Html<String> {
	render("fringe review acknowledgement", ReviewThanks { ctx: RenderContext::now() })
}

pub async fn fringe_application() -> Html<String> {
	render("fringe application acknowledgement", ApplicationThanks { ctx: RenderContext::now() })
}

pub async fn info_request() -> Html<String> {
	render("feedback", InfoThanks { ctx: RenderContext::now() })
}

struct FeedbackThanks {
	ctx: RenderContext
}

impl RenderOnce for FeedbackThanks {
	fn render_once(self, tmpl: &mut TemplateBuffer) {
		let RenderContext { greeting, time, date } = self.ctx;
		tmpl << html! {
			p : greeting;
			p { b : "Thank you for your comments."; }
			p {
				: "These were sent at ";
				: time;
				: " on ";
				: date;
			}
			p : "They will be read and acted upon as soon as possible.";
		}
	}
}

struct ReviewThanks {
	ctx: RenderContext
}

impl RenderOnce for ReviewThanks {
	fn render_once(self, tmpl: &mut TemplateBuffer) {
		let RenderContext { greeting, time, date } = self.ctx;
		tmpl << html! {
			p : greeting;
			p : "Thank you for sending us your review.";
			p {
				: "This was sent at ";
				: time;
				: " on ";
				: date;
			}
			p {
				: "We will post this as soon as possible.";
				br;
				: "If it doesn't appear on the website within 24 hours then please ring us on 07974 569849.";
			}
			p {
				a(href = "/index.htm") { b : "click" }
				: " to return to home page";
			}
		}
	}
}

struct ApplicationThanks {
	ctx: RenderContext
}

impl RenderOnce for ApplicationThanks {
	fn render_once(self, tmpl: &mut TemplateBuffer) {
		let RenderContext { greeting, time, date } = self.ctx;
		tmpl << html! {
			p : greeting;
			p : "Thank you for filling in the form.";
			p {
				: "This was sent at ";
				: time;
				: " on ";
				: date;
			}
		}
	}
}

// The info page is set in h2s with a "go back" button rather than the usual
// paragraphs; visitors land on it mid-browse, so it sends them back to
// wherever they came from instead of home.
struct InfoThanks {
	ctx: RenderContext
}

impl RenderOnce for InfoThanks {
	fn render_once(self, tmpl: &mut TemplateBuffer) {
		let RenderContext { greeting, time, date } = self.ctx;
		tmpl << html! {
			h2 : greeting;
			h2 : "Thank you for the info";
			h2 {
				: "This was sent at ";
				: time;
				: " on ";
				: date;
			}
			p(style = "text-align: center") {
				input(
					type = "button",
					value = "click to return to previous page",
					onclick = "history.go(-2)",
					class = "return-btn"
				);
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use chrono::NaiveDate;

	fn morning() -> RenderContext {
		RenderContext::from_datetime(
			NaiveDate::from_ymd_opt(2024, 9, 7).unwrap()
				.and_hms_opt(9, 5, 3).unwrap()
		)
	}

	fn page_html<C: RenderOnce + 'static>(title: &'static str, content: C) -> String {
		PageShell { title, content }.into_string().unwrap()
	}

	#[test]
	fn feedback_page_renders_context_and_copy() {
		let html = page_html("feedback response", FeedbackThanks { ctx: morning() });
		assert!(html.contains("<title>feedback response</title>"));
		assert!(html.contains("Good morning "));
		assert!(html.contains("These were sent at 09:05:03 on 7 September 2024"));
		assert!(html.contains("Thank you for your comments."));
		assert!(html.contains("They will be read and acted upon as soon as possible."));
	}

	#[test]
	fn review_page_renders_context_and_copy() {
		let html = page_html("fringe review acknowledgement", ReviewThanks { ctx: morning() });
		assert!(html.contains("<title>fringe review acknowledgement</title>"));
		assert!(html.contains("Thank you for sending us your review."));
		assert!(html.contains("This was sent at 09:05:03 on 7 September 2024"));
		assert!(html.contains("please ring us on 07974 569849"));
		assert!(html.contains(" to return to home page"));
	}

	#[test]
	fn application_page_renders_context_and_copy() {
		let html = page_html("fringe application acknowledgement", ApplicationThanks { ctx: morning() });
		assert!(html.contains("<title>fringe application acknowledgement</title>"));
		assert!(html.contains("Good morning "));
		assert!(html.contains("Thank you for filling in the form."));
		assert!(html.contains("This was sent at 09:05:03 on 7 September 2024"));
	}

	#[test]
	fn info_page_renders_context_and_copy() {
		let html = page_html("feedback", InfoThanks { ctx: morning() });
		assert!(html.contains("<title>feedback</title>"));
		assert!(html.contains("Thank you for the info"));
		assert!(html.contains("This was sent at 09:05:03 on 7 September 2024"));
		assert!(html.contains("history.go(-2)"));
	}

	#[test]
	fn shell_carries_the_navigation() {
		let html = page_html("feedback response", FeedbackThanks { ctx: morning() });
		assert!(html.contains(">home</a>"));
		assert!(html.contains(">volunteer</a>"));
		assert!(html.contains("dropdown-content"));
		assert!(html.contains("menubar"));
	}

	#[test]
	fn evening_submission_greets_accordingly() {
		let ctx = RenderContext::from_datetime(
			NaiveDate::from_ymd_opt(2024, 9, 7).unwrap()
				.and_hms_opt(17, 0, 0).unwrap()
		);
		let html = page_html("fringe application acknowledgement", ApplicationThanks { ctx });
		assert!(html.contains("Good evening "));
	}
}
