use chrono::{Local, NaiveDateTime, Timelike};

/// Which third of the day a visitor is hitting the site in, going by the
/// serving host's wall clock. Thresholds are noon and 5pm.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TimeOfDay {
	Morning,
	Afternoon,
	Evening
}

impl TimeOfDay {
	#[must_use]
	pub fn from_hour(hour: u32) -> Self {
		if hour < 12 {
			Self::Morning
		} else if hour < 17 {
			Self::Afternoon
		} else {
			Self::Evening
		}
	}

	// The trailing space is part of the rendered copy.
	#[must_use]
	pub fn greeting(self) -> &'static str {
		match self {
			Self::Morning => "Good morning ",
			Self::Afternoon => "Good afternoon ",
			Self::Evening => "Good evening "
		}
	}
}

/// Everything an acknowledgement page needs from the clock. Built once per
/// render and thrown away with the response.
pub struct RenderContext {
	pub greeting: &'static str,
	pub time: String,
	pub date: String
}

impl RenderContext {
	#[must_use]
	pub fn now() -> Self {
		Self::from_datetime(Local::now().naive_local())
	}

	#[must_use]
	pub fn from_datetime(dt: NaiveDateTime) -> Self {
		Self {
			greeting: TimeOfDay::from_hour(dt.hour()).greeting(),
			time: time_string(&dt),
			date: date_string(&dt)
		}
	}
}

#[must_use]
pub fn time_string(dt: &NaiveDateTime) -> String {
	dt.format("%H:%M:%S").to_string()
}

// %-d so the seventh comes out as "7 September 2024", not "07"
#[must_use]
pub fn date_string(dt: &NaiveDateTime) -> String {
	dt.format("%-d %B %Y").to_string()
}

pub const BASE_STYLE: &str = r"
body {
	margin: 0;
	font-family: verdana, sans-serif;
	background-color: #fdf6ec;
	color: #2b2b2b;
}
#holder {
	position: relative;
	max-width: 960px;
	margin: 0 auto;
}
#bridge img, #bridgemobile img {
	width: 100%;
	border: none;
}
#bridgemobile {
	display: none;
}
@media (max-width: 610px) {
	#bridge { display: none; }
	#bridgemobile { display: block; }
}
#response {
	margin: 3em auto;
	max-width: 50%;
	text-align: left;
}
#response h2 {
	font-weight: normal;
}
.return-btn {
	font-family: verdana, sans-serif;
	color: #fff;
	padding: .3em;
	font-weight: bold;
	border: none;
	background-color: #1a7cf3;
	font-size: 12px;
	cursor: pointer;
}
";

pub const MENU_STYLE: &str = r"
#menubar {
	height: 2.2em;
	background-color: #7a1f2b;
}
#topmenu ul {
	list-style: none;
	margin: 0;
	padding: 0;
	display: flex;
	flex-wrap: wrap;
}
#topmenu li a {
	display: block;
	padding: .4em .8em;
	color: #fdf6ec;
	text-decoration: none;
}
#topmenu li a:hover {
	background-color: #a33544;
}
#topmenu {
	position: absolute;
	top: 0;
	width: 100%;
}
#topminimenu {
	display: none;
}
@media (max-width: 610px) {
	#topmenu { display: none; }
	#topminimenu {
		display: block;
		position: absolute;
		top: 0;
		right: 0;
	}
}
.dropbtn {
	padding: .6em 1.2em;
	border: none;
	background-color: #7a1f2b;
	cursor: pointer;
}
.dropdown-content {
	display: none;
	position: absolute;
	right: 0;
	background-color: #7a1f2b;
	min-width: 10em;
}
.dropdown-content.show {
	display: block;
}
.dropdown-content ul {
	list-style: none;
	margin: 0;
	padding: 0;
}
.dropdown-content li a {
	display: block;
	padding: .4em .8em;
	color: #fdf6ec;
	text-decoration: none;
}
";
