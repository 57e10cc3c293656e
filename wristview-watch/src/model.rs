//! Application state and the canned data the screens display.

use crate::location::Fix;
use chrono::{DateTime, Local};

/// One sent emergency beacon.
#[derive(Debug, Clone, PartialEq)]
pub struct BeaconDispatch {
    pub fix: Fix,
    pub sent_at: DateTime<Local>,
}

/// Shared beacon state: the most recent dispatch, if any.
#[derive(Debug, Clone, Default)]
pub struct BeaconState {
    pub last: Option<BeaconDispatch>,
}

#[derive(Debug, Clone, Copy)]
pub struct Contact {
    pub name: &'static str,
    pub number: &'static str,
}

pub const CONTACT_BOOK: &[Contact] = &[
    Contact { name: "Alex Ho", number: "+61 402 117 334" },
    Contact { name: "Dana Whitfield", number: "+61 433 908 121" },
    Contact { name: "Lena Park", number: "+61 401 552 876" },
    Contact { name: "Marcus Bell", number: "+61 415 220 043" },
    Contact { name: "Priya Raman", number: "+61 422 671 509" },
    Contact { name: "Sam Okafor", number: "+61 430 118 762" },
    Contact { name: "Tomoko Ishii", number: "+61 407 384 295" },
];

#[derive(Debug, Clone, Copy)]
pub struct Headline {
    pub title: &'static str,
    pub source: &'static str,
}

pub const HEADLINES: &[Headline] = &[
    Headline { title: "Harbour ferries back on schedule after outage", source: "Metro" },
    Headline { title: "Cool change expected late this evening", source: "Weather" },
    Headline { title: "Trail closures in the national park this weekend", source: "Parks" },
    Headline { title: "Community first-aid course places still open", source: "Local" },
    Headline { title: "New tide tables published for the bay", source: "Marine" },
    Headline { title: "Road works on the coastal route until Friday", source: "Traffic" },
];

#[derive(Debug, Clone, Copy)]
pub struct TeamMember {
    pub name: &'static str,
    pub role: &'static str,
}

pub const TEAM_ROSTER: &[TeamMember] = &[
    TeamMember { name: "J. Calder", role: "Field lead" },
    TeamMember { name: "R. Nguyen", role: "Comms" },
    TeamMember { name: "E. Sorensen", role: "Medic" },
    TeamMember { name: "K. Adeyemi", role: "Navigation" },
];
