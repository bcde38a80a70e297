use dioxus::prelude::*;

struct Story {
    section: &'static str,
    headline: &'static str,
    summary: &'static str,
}

const STORIES: &[Story] = &[
    Story {
        section: "City",
        headline: "Council approves new riverside cycle path",
        summary: "The four-kilometre route will link the old harbour with the university campus by next spring.",
    },
    Story {
        section: "Business",
        headline: "Local bakery chain opens its tenth shop",
        summary: "Founded in a garage twelve years ago, the family business now employs more than two hundred people.",
    },
    Story {
        section: "Science",
        headline: "Students track migrating swifts with tiny sensors",
        summary: "A school project has produced the most detailed map yet of the birds' route to Central Africa.",
    },
    Story {
        section: "Culture",
        headline: "Summer festival announces open-air programme",
        summary: "Twenty concerts and a silent cinema night are planned across three parks in July.",
    },
];

#[component]
pub fn HomePage() -> Element {
    rsx! {
      section { class: "stories",
        for story in STORIES {
          article { class: "story",
            span { class: "story__section", "{story.section}" }
            h2 { class: "story__headline", "{story.headline}" }
            p { class: "story__summary", "{story.summary}" }
          }
        }
      }
    }
}
