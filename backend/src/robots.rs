// The acknowledgement pages are the landing targets of form submissions;
// there's nothing on them worth a crawler's time.
const ROBOTS_TXT: &str = "User-agent: *
Disallow: /feedback
Disallow: /feedback.php
Disallow: /reviewform
Disallow: /reviewform.php
Disallow: /fringeform
Disallow: /fringeform.php
Disallow: /info
Disallow: /info.php
";

pub async fn robots_txt() -> &'static str {
	ROBOTS_TXT
}
