// src/main.rs — DPS MUN Jodhpur conference site (Rust + Yew + WASM)

use gloo_events::EventListener;
use serde::Deserialize;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;
use yew::prelude::*;

const CATALOG_SCRIPT_ID: &str = "committee-catalog";

// Rules documents that are not uploaded yet land on this page.
const FALLBACK_DOC_HREF: &str = "./filenotfound.html";

/* ---------- committee catalog ---------- */

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
enum CommitteeType {
    International,
    National,
}

// Delegate capacity is display-only and arrives either as a number or as
// free text ("TBD", "136"), so both shapes deserialize.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
enum Delegates {
    Count(u32),
    Text(String),
}

impl Delegates {
    fn label(&self) -> String {
        match self {
            Delegates::Count(n) => n.to_string(),
            Delegates::Text(s) => s.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
struct Committee {
    name: String,
    short: String,
    description: String,
    delegates: Delegates,
    agenda: String,
    #[serde(default)]
    chairpersons: Vec<String>,
    #[serde(rename = "rulesPdf", default = "fallback_doc_href")]
    rules_pdf: String,
    #[serde(rename = "type")]
    kind: CommitteeType,
}

fn fallback_doc_href() -> String {
    FALLBACK_DOC_HREF.to_string()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CommitteeFilter {
    All,
    International,
    National,
}

impl CommitteeFilter {
    fn all() -> [CommitteeFilter; 3] {
        [
            CommitteeFilter::All,
            CommitteeFilter::International,
            CommitteeFilter::National,
        ]
    }

    fn admits(self, kind: CommitteeType) -> bool {
        match self {
            CommitteeFilter::All => true,
            CommitteeFilter::International => kind == CommitteeType::International,
            CommitteeFilter::National => kind == CommitteeType::National,
        }
    }
}

fn filter_label(f: CommitteeFilter) -> &'static str {
    match f {
        CommitteeFilter::All => "All Committees",
        CommitteeFilter::International => "International",
        CommitteeFilter::National => "National",
    }
}

// Stable filter: catalog order is preserved, nothing is re-sorted.
fn filter_committees(catalog: &[Committee], filter: CommitteeFilter) -> Vec<Committee> {
    catalog
        .iter()
        .filter(|c| filter.admits(c.kind))
        .cloned()
        .collect()
}

fn parse_catalog(json: &str) -> Result<Vec<Committee>, String> {
    serde_json::from_str::<Vec<Committee>>(json)
        .map_err(|e| format!("Committee catalog parse error: {e}"))
}

fn read_embedded_json(script_id: &str) -> Option<String> {
    let w = web_sys::window()?;
    let doc = w.document()?;
    let el = doc.get_element_by_id(script_id)?;
    el.text_content()
}

// The catalog ships inside index.html (script#committee-catalog) and is read
// exactly once at startup. Chairperson reveals stay a deploy-time text edit
// instead of a recompile.
fn load_catalog() -> Result<Vec<Committee>, String> {
    let Some(json) = read_embedded_json(CATALOG_SCRIPT_ID) else {
        return Err(format!(
            "Committee catalog not found in the page (script#{CATALOG_SCRIPT_ID})."
        ));
    };
    match parse_catalog(&json) {
        Ok(list) => {
            log::info!("committee catalog loaded: {} entries", list.len());
            Ok(list)
        }
        Err(e) => {
            log::error!("{e}");
            Err(e)
        }
    }
}

/* ---------- scroll spy ---------- */

// Matches the anchor sections the nav highlights while scrolling. The
// secretariat section is deliberately untracked.
const SCROLLSPY_SECTIONS: &[&str] = &["home", "about", "committees", "timeline"];
const SCROLLSPY_OFFSET: f64 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq)]
struct SectionSpan {
    id: &'static str,
    top: f64,
    height: f64,
}

// Containment is inclusive at the top edge, exclusive at the bottom. When
// spans overlap the last one wins; a position outside every span resolves to
// None so the previous highlight sticks.
fn resolve_active_section(position: f64, spans: &[SectionSpan]) -> Option<&'static str> {
    let mut active = None;
    for s in spans {
        if position >= s.top && position < s.top + s.height {
            active = Some(s.id);
        }
    }
    active
}

fn measure_sections() -> Vec<SectionSpan> {
    let Some(w) = web_sys::window() else {
        return vec![];
    };
    let Some(doc) = w.document() else {
        return vec![];
    };

    let mut out = Vec::new();
    for &id in SCROLLSPY_SECTIONS {
        let Some(el) = doc.get_element_by_id(id) else {
            continue;
        };
        let Ok(el) = el.dyn_into::<HtmlElement>() else {
            continue;
        };
        out.push(SectionSpan {
            id,
            top: el.offset_top() as f64,
            height: el.offset_height() as f64,
        });
    }
    out
}

fn scroll_position() -> f64 {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
        + SCROLLSPY_OFFSET
}

/* ---------- page copy (static data) ---------- */

const NAV_ITEMS: &[(&str, &str)] = &[
    ("Home", "home"),
    ("About", "about"),
    ("Committees", "committees"),
    ("Secretariat", "secretariat"),
    ("Timeline", "timeline"),
];

struct Stat {
    glyph: &'static str,
    figure: &'static str,
    label: &'static str,
    accent: &'static str,
}

const STATS: &[Stat] = &[
    Stat { glyph: "🏆", figure: "9", label: "Years of Excellence", accent: "gold" },
    Stat { glyph: "👥", figure: "350+", label: "Delegates", accent: "blue" },
    Stat { glyph: "🏛️", figure: "9", label: "Dynamic Committees", accent: "purple" },
    Stat { glyph: "⭐", figure: "10+", label: "Participating Schools", accent: "green" },
];

const HIGHLIGHTS: &[&str] = &[
    "Expert Chairpersons from prestigious universities",
    "Networking opportunities with delegates nationwide",
    "Award ceremonies and recognition",
    "Cultural and Social Interaction",
    "Professional photography and documentation",
];

const PAST_ACHIEVEMENTS: &[&str] = &[
    "2,000+ delegates trained",
    "50+ schools participated",
    "High delegate satisfaction rate",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Completed,
    Current,
    Upcoming,
}

struct TimelineItem {
    date: &'static str,
    event: &'static str,
    phase: Phase,
}

const TIMELINE: &[TimelineItem] = &[
    TimelineItem { date: "August 22, 2025", event: "Opening Ceremony", phase: Phase::Completed },
    TimelineItem { date: "August 23, 2025", event: "MUN committee sessions Day-1", phase: Phase::Current },
    TimelineItem { date: "August 23, 2025", event: "Cultural Evening", phase: Phase::Upcoming },
    TimelineItem { date: "August 24, 2025", event: "MUN committee sessions Day-2", phase: Phase::Current },
    TimelineItem { date: "August 24, 2025", event: "Closing Ceremony", phase: Phase::Upcoming },
];

fn phase_class(p: Phase) -> &'static str {
    match p {
        Phase::Completed => "done",
        Phase::Current => "current",
        Phase::Upcoming => "upcoming",
    }
}

struct Lead {
    name: &'static str,
    post: &'static str,
    bio: &'static str,
}

const SECRETARIAT_LEADS: &[Lead] = &[
    Lead {
        name: "Aarav Jain",
        post: "Secretary General",
        bio: "Oversees and manages the Secretariat and ensures that team spirit is upheld.",
    },
    Lead {
        name: "Kushagra Singh Deora",
        post: "Director General",
        bio: "Handles operations and logistics of the conference with precision.",
    },
    Lead {
        name: "Rishi Bhandari",
        post: "Assistant Secretary General",
        bio: "Supports core leadership and keeps the MUN engine running smoothly behind the scenes.",
    },
    Lead {
        name: "Dhruv Jain",
        post: "Assistant Director General",
        bio: "Manages conference operations, logistics, and ensures a smooth delegate experience.",
    },
];

struct Usg {
    name: &'static str,
    post: &'static str,
}

const SECRETARIAT_USGS: &[Usg] = &[
    Usg { name: "Mudra Warde", post: "USG EB Affairs" },
    Usg { name: "Ayushi Chaudhary", post: "USG EB Affairs & Marketing" },
    Usg { name: "Harshal Sharma", post: "USG IT" },
    Usg { name: "Kamlesh Suthar", post: "USG Design" },
    Usg { name: "Priyal Bhandari", post: "USG IT" },
    Usg { name: "Deshna Jain", post: "USG Design" },
    Usg { name: "Abhinna Das", post: "USG EB Affairs" },
    Usg { name: "Pratha Bhardwaj", post: "USG Delegate Affairs" },
    Usg { name: "Rupeksha Rajpurohit", post: "USG Delegate Affairs" },
    Usg { name: "Vinay Chhugani", post: "USG Delegate Affairs" },
    Usg { name: "Prachi Shah", post: "USG IT" },
    Usg { name: "Krishna Dhoot", post: "USG IT" },
    Usg { name: "Teesha Garg", post: "USG Social Media" },
    Usg { name: "Kavya Anchalia", post: "USG Social Media" },
    Usg { name: "Moulik Lodha", post: "USG Cultural" },
    Usg { name: "Charvi Maheshwari", post: "USG Cultural" },
    Usg { name: "Priyanshi Charan", post: "USG Cultural" },
    Usg { name: "Kritika Kalia", post: "USG Marketing" },
    Usg { name: "Laxman Beniwal", post: "USG Discipline" },
    Usg { name: "Srishti Hiranandani", post: "USG Discipline" },
    Usg { name: "Rachel C. Kujur", post: "USG Literary" },
    Usg { name: "Kenjal Jain", post: "USG Finance" },
    Usg { name: "Rakshit Loonkar", post: "USG Finance" },
    Usg { name: "Gunnpreet Gulati", post: "USG Transport & Catering" },
    Usg { name: "Samarth Vasu", post: "USG Catering" },
    Usg { name: "Bhavya Tiwari", post: "USG Decoration" },
];

/* ---------- small helpers ---------- */

// Avatar letters from the first and last word of a name.
fn initials(name: &str) -> String {
    let mut words = name.split_whitespace();
    let first = words.next();
    let last = words.last();

    let mut out = String::new();
    for w in [first, last].into_iter().flatten() {
        if let Some(c) = w.chars().next() {
            out.extend(c.to_uppercase());
        }
    }
    out
}

/* ---------- overlay ---------- */

fn committee_overlay(committee: &Committee, on_close: Callback<MouseEvent>) -> Html {
    html! {
      <div class="overlay">
        <div class="overlay-card">
          <button class="overlay-close" aria-label="Close" onclick={on_close}>{ "✕" }</button>

          <h2 class="overlay-title">
            { format!("{} ({})", committee.name, committee.short) }
          </h2>
          <p class="overlay-desc">{ committee.description.clone() }</p>

          <div class="overlay-block">
            <h3>{ "📋 Agenda" }</h3>
            <p>{ committee.agenda.clone() }</p>
          </div>

          <div class="overlay-block">
            <h3>{ "🪪 Chairpersons" }</h3>
            {
              if committee.chairpersons.is_empty() {
                html! { <p class="muted">{ "To be announced." }</p> }
              } else {
                html! {
                  <ul>
                    { for committee.chairpersons.iter().map(|c| html! { <li>{ c.clone() }</li> }) }
                  </ul>
                }
              }
            }
          </div>

          <div class="overlay-block">
            <h3>{ "📄 Rules of Procedure" }</h3>
            <a
              class="btn primary"
              href={committee.rules_pdf.clone()}
              target="_blank"
              rel="noopener noreferrer"
            >
              { "View PDF →" }
            </a>
          </div>
        </div>
      </div>
    }
}

/* ---------- app ---------- */

#[function_component(App)]
fn app() -> Html {
    let menu_open = use_state(|| false);
    let active_section = use_state(|| "home");
    let filter = use_state(|| CommitteeFilter::All);
    let selected = use_state(|| None::<Committee>);
    let catalog = use_state(load_catalog);

    // Highlight the nav link of the section under the viewport while
    // scrolling; the listener lives until unmount.
    {
        let active_section = active_section.clone();
        use_effect_with((), move |_| {
            let listener = web_sys::window().map(|w| {
                EventListener::new(&w, "scroll", move |_| {
                    if let Some(id) = resolve_active_section(scroll_position(), &measure_sections()) {
                        active_section.set(id);
                    }
                })
            });
            move || drop(listener)
        });
    }

    let on_menu_toggle = {
        let menu_open = menu_open.clone();
        Callback::from(move |_| menu_open.set(!*menu_open))
    };

    // Picking a destination from the mobile menu also closes it.
    let on_nav_pick = {
        let menu_open = menu_open.clone();
        Callback::from(move |_| menu_open.set(false))
    };

    let on_close_overlay = {
        let selected = selected.clone();
        Callback::from(move |_| selected.set(None))
    };

    let visible = match &*catalog {
        Ok(list) => filter_committees(list, *filter),
        Err(_) => Vec::new(),
    };

    let catalog_banner = if let Err(e) = &*catalog {
        html! { <div class="err">{ e.clone() }</div> }
    } else {
        html! {}
    };

    let header_view = html! {
      <header class="site-header">
        <div class="container headrow">
          <div class="brand">
            <span class="logo">{ "🌐" }</span>
            <span class="brandname">{ "DPS MUN Jodhpur" }</span>
          </div>

          <nav class="nav">
            { for NAV_ITEMS.iter().map(|&(label, id)| {
                let cls = if *active_section == id { "navlink active" } else { "navlink" };
                html! { <a class={cls} href={format!("#{id}")}>{ label }</a> }
            }) }
          </nav>

          <button class="menu-btn" aria-label="Menu" onclick={on_menu_toggle}>
            { if *menu_open { "✕" } else { "☰" } }
          </button>
        </div>

        if *menu_open {
          <div class="mobile-menu">
            { for NAV_ITEMS.iter().map(|&(label, id)| {
                let on_nav_pick = on_nav_pick.clone();
                html! {
                  <a class="navlink" href={format!("#{id}")} onclick={on_nav_pick}>{ label }</a>
                }
            }) }
          </div>
        }
      </header>
    };

    let hero_view = html! {
      <section id="home" class="hero">
        <div class="container herogrid">
          <div class="herocopy">
            <span class="eyebrow">{ "🎉 8th Annual Conference" }</span>
            <h1>
              { "DPS MUN" }
              <span class="sub">{ "Jodhpur 2025" }</span>
            </h1>
            <p class="lede">
              { "Join us for an extraordinary diplomatic experience at Delhi Public School \
                 Jodhpur's flagship Model United Nations conference. Where young minds shape \
                 the future through debate, diplomacy, and international cooperation." }
            </p>
            <a class="btn outline" href="#about">{ "Learn More" }</a>

            <div class="quickinfo">
              <span>{ "📅 Aug 22-24, 2025" }</span>
              <span>{ "📍 DPS Jodhpur" }</span>
              <span>{ "👥 350+ Delegates" }</span>
            </div>
          </div>

          <div class="heropanel glass">
            <div class="heropanel-head">
              <span class="logo big">{ "🌐" }</span>
              <h3>{ "Conference Overview" }</h3>
            </div>
            <div class="factrow"><span>{ "Duration" }</span><strong>{ "3 Days" }</strong></div>
            <div class="factrow"><span>{ "Committees" }</span><strong>{ "9 Active" }</strong></div>
            <div class="factrow"><span>{ "Experience Level" }</span><strong>{ "All Levels" }</strong></div>
          </div>
        </div>
      </section>
    };

    let stats_view = html! {
      <section class="stats band">
        <div class="container statgrid">
          { for STATS.iter().map(|s| html! {
              <div class="card stat">
                <span class={classes!("statglyph", s.accent)}>{ s.glyph }</span>
                <div class="figure">{ s.figure }</div>
                <div class="muted">{ s.label }</div>
              </div>
          }) }
        </div>
      </section>
    };

    let about_view = html! {
      <section id="about" class="about">
        <div class="container">
          <h2 class="sectiontitle">{ "About DPS MUN Jodhpur" }</h2>
          <p class="sectionlede">
            { "Delhi Public School Jodhpur Model United Nations (DPSMUN), Jodhpur, stands as a \
               distinguished MUN conference with a legacy of seven successful editions. At DPSMUN, \
               we are dedicated to delivering excellence to our participants, fostering their \
               growth in diplomacy, research, public speaking, and other essential soft skills. \
               Since 2016, DPSMUN has not only introduced but also consistently upheld and \
               exceeded the standards of MUN conferences in the city. This year, we are thrilled \
               to announce our 8th edition, promising to elevate the celebration of diplomacy to \
               unprecedented heights!" }
          </p>

          <div class="aboutgrid">
            <div class="whylist">
              <h3>{ "Why Choose DPS MUN?" }</h3>
              { for HIGHLIGHTS.iter().map(|h| html! {
                  <div class="whyrow">
                    <span class="check">{ "✔" }</span>
                    <span>{ *h }</span>
                  </div>
              }) }
            </div>

            <div class="card legacy glass">
              <span class="logo big">{ "🏅" }</span>
              <h4>{ "Legacy of Excellence" }</h4>
              <p class="muted">{ "Building future leaders since 2016" }</p>
              <div class="legacybox">
                <h5>{ "Past Achievements" }</h5>
                <ul>
                  { for PAST_ACHIEVEMENTS.iter().map(|a| html! { <li>{ *a }</li> }) }
                </ul>
              </div>
            </div>
          </div>
        </div>
      </section>
    };

    let committees_view = html! {
      <section id="committees" class="committees band">
        <div class="container">
          <h2 class="sectiontitle">{ "Our Committees" }</h2>
          <p class="sectionlede">
            { "Diverse committees offering unique perspectives on global challenges and \
               opportunities for delegates of all experience levels." }
          </p>

          { catalog_banner }

          <div class="filters">
            { for CommitteeFilter::all().into_iter().map(|f| {
                let cls = if *filter == f { "btn filter active" } else { "btn filter" };
                let filter = filter.clone();
                html! {
                  <button class={cls} onclick={Callback::from(move |_| filter.set(f))}>
                    { filter_label(f) }
                  </button>
                }
            }) }
          </div>

          <div class="grid committeegrid">
            { for visible.iter().map(|committee| {
                let selected = selected.clone();
                let record = committee.clone();
                let onclick = Callback::from(move |_| selected.set(Some(record.clone())));
                html! {
                  <div class="card committee" key={committee.short.clone()} onclick={onclick}>
                    <h3 class="short">{ committee.short.clone() }</h3>
                    <h4 class="fullname">{ committee.name.clone() }</h4>
                    <p class="desc">{ committee.description.clone() }</p>
                    <div class="cardfoot">
                      <span class="muted">{ format!("Delegates: {}", committee.delegates.label()) }</span>
                      <span class="chev">{ "›" }</span>
                    </div>
                  </div>
                }
            }) }
          </div>
        </div>
      </section>
    };

    let secretariat_view = html! {
      <section id="secretariat" class="secretariat">
        <div class="container">
          <h2 class="sectiontitle">{ "Meet the Secretariat" }</h2>
          <p class="sectionlede">
            { "The backbone of DPS MUN, ensuring seamless execution and a memorable experience \
               for all delegates." }
          </p>

          <div class="grid leadgrid">
            { for SECRETARIAT_LEADS.iter().map(|m| html! {
                <div class="card lead">
                  <span class="avatar">{ initials(m.name) }</span>
                  <h3>{ m.name }</h3>
                  <p class="post">{ m.post }</p>
                  <p class="muted">{ m.bio }</p>
                </div>
            }) }
          </div>

          <div class="usgrail">
            { for SECRETARIAT_USGS.iter().map(|m| html! {
                <div class="card usg">
                  <span class="avatar small">{ initials(m.name) }</span>
                  <h3>{ m.name }</h3>
                  <p class="post">{ m.post }</p>
                </div>
            }) }
          </div>
        </div>
      </section>
    };

    let timeline_view = html! {
      <section id="timeline" class="timeline">
        <div class="container narrow">
          <h2 class="sectiontitle">{ "Timeline" }</h2>
          <p class="sectionlede">
            { "Stay updated with key dates and deadlines for DPS MUN Jodhpur 2025" }
          </p>

          { for TIMELINE.iter().enumerate().map(|(i, item)| {
              let cls = classes!("timelinecard", phase_class(item.phase));
              html! {
                <div class="timelinerow">
                  <div class="node">
                    if i + 1 < TIMELINE.len() {
                      <span class="stem"></span>
                    }
                  </div>
                  <div class={cls}>
                    <div>
                      <h3>{ item.event }</h3>
                      <p class="muted">{ item.date }</p>
                    </div>
                    <span class={classes!("dot", phase_class(item.phase))}></span>
                  </div>
                </div>
              }
          }) }
        </div>
      </section>
    };

    let year = js_sys::Date::new_0().get_full_year();

    let footer_view = html! {
      <footer class="site-footer">
        <div class="container footgrid">
          <div>
            <div class="brand">
              <span class="logo">{ "🌐" }</span>
              <h3>{ "DPS MUN Jodhpur" }</h3>
            </div>
            <p class="dim">{ "Shaping future diplomats" }</p>
          </div>

          <div>
            <h4>{ "Quick Links" }</h4>
            <ul class="footlinks">
              <li><a href="#about">{ "About Us" }</a></li>
              <li><a href="#committees">{ "Committees" }</a></li>
              <li><a href="#secretariat">{ "Secretariat" }</a></li>
              <li><a href="#timeline">{ "Timeline" }</a></li>
            </ul>
          </div>

          <div>
            <h4>{ "Contact Us" }</h4>
            <ul class="footlinks">
              <li>{ "📍 Delhi Public School, Jodhpur" }</li>
              <li>{ "✉️ queries.dpsjodhpurmun@gmail.com" }</li>
            </ul>
          </div>
        </div>

        <div class="copyright">
          { format!("© {year} DPS MUN Jodhpur. All rights reserved.") }
        </div>
      </footer>
    };

    let overlay_view = match &*selected {
        Some(committee) => committee_overlay(committee, on_close_overlay),
        None => html! {},
    };

    html! {
      <div class="page">
        <div class="bg-wave" aria-hidden="true"></div>
        { header_view }
        { hero_view }
        { stats_view }
        { about_view }
        { committees_view }
        { secretariat_view }
        { timeline_view }
        { footer_view }
        { overlay_view }
      </div>
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    yew::Renderer::<App>::new().render();
}

/* ---------- tests ---------- */

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"[
        {
            "name": "United Nations Security Council",
            "short": "UNSC",
            "description": "The primary UN body responsible for maintaining international peace and security.",
            "delegates": 36,
            "agenda": "Deliberation on rising tensions and strategies for de-escalation.",
            "chairpersons": ["A. Chair", "B. Chair"],
            "rulesPdf": "./docs/unsc-rop.pdf",
            "type": "International"
        },
        {
            "name": "United Nations Human Rights Council",
            "short": "UNHRC",
            "description": "Promotion and protection of human rights around the globe.",
            "delegates": "47",
            "agenda": "Protecting freedom of the press.",
            "chairpersons": ["Revealing Soon"],
            "rulesPdf": "./filenotfound.html",
            "type": "International"
        },
        {
            "name": "Lok Sabha",
            "short": "Lok Sabha",
            "description": "The lower house of the Indian Parliament.",
            "delegates": 136,
            "agenda": "Deliberation on comprehensive electoral reforms.",
            "type": "National"
        }
    ]"#;

    fn sample_catalog() -> Vec<Committee> {
        parse_catalog(SAMPLE).expect("sample catalog parses")
    }

    #[test]
    fn parses_full_records() {
        let catalog = sample_catalog();
        assert_eq!(catalog.len(), 3);

        let unsc = &catalog[0];
        assert_eq!(unsc.short, "UNSC");
        assert_eq!(unsc.kind, CommitteeType::International);
        assert_eq!(unsc.chairpersons.len(), 2);
        assert_eq!(unsc.rules_pdf, "./docs/unsc-rop.pdf");
    }

    #[test]
    fn delegates_accept_numbers_and_text() {
        let catalog = sample_catalog();
        assert_eq!(catalog[0].delegates.label(), "36");
        assert_eq!(catalog[1].delegates.label(), "47");
    }

    #[test]
    fn missing_chairpersons_become_empty_list() {
        let catalog = sample_catalog();
        assert!(catalog[2].chairpersons.is_empty());
    }

    #[test]
    fn missing_rules_document_falls_back() {
        let catalog = sample_catalog();
        assert_eq!(catalog[2].rules_pdf, FALLBACK_DOC_HREF);
    }

    #[test]
    fn unknown_committee_type_rejects_the_document() {
        let json = r#"[{
            "name": "X", "short": "X", "description": "x",
            "delegates": 1, "agenda": "x", "type": "Regional"
        }]"#;
        assert!(parse_catalog(json).is_err());
    }

    #[test]
    fn malformed_document_reports_an_error() {
        assert!(parse_catalog("{ not json").is_err());
    }

    #[test]
    fn filter_all_returns_catalog_in_order() {
        let catalog = sample_catalog();
        let shown = filter_committees(&catalog, CommitteeFilter::All);
        let shorts: Vec<_> = shown.iter().map(|c| c.short.as_str()).collect();
        assert_eq!(shorts, ["UNSC", "UNHRC", "Lok Sabha"]);
    }

    #[test]
    fn filter_preserves_catalog_order() {
        let catalog = sample_catalog();
        let shown = filter_committees(&catalog, CommitteeFilter::International);
        let shorts: Vec<_> = shown.iter().map(|c| c.short.as_str()).collect();
        assert_eq!(shorts, ["UNSC", "UNHRC"]);
    }

    #[test]
    fn single_national_record_filters_to_a_singleton() {
        let catalog = sample_catalog();
        let shown = filter_committees(&catalog, CommitteeFilter::National);
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].short, "Lok Sabha");
    }

    #[test]
    fn repeated_filtering_is_idempotent() {
        let catalog = sample_catalog();
        let once = filter_committees(&catalog, CommitteeFilter::National);
        let twice = filter_committees(&catalog, CommitteeFilter::National);
        assert_eq!(once, twice);
    }

    #[test]
    fn zero_match_filter_yields_an_empty_grid() {
        let catalog: Vec<Committee> = sample_catalog()
            .into_iter()
            .filter(|c| c.kind == CommitteeType::International)
            .collect();
        assert!(filter_committees(&catalog, CommitteeFilter::National).is_empty());
    }

    #[test]
    fn selection_swaps_without_an_intermediate_state() {
        let catalog = sample_catalog();

        let mut selected = Some(catalog[0].clone());
        assert_eq!(selected.as_ref().map(|c| c.short.as_str()), Some("UNSC"));

        selected = Some(catalog[1].clone());
        assert_eq!(selected.as_ref().map(|c| c.short.as_str()), Some("UNHRC"));

        selected = None;
        assert!(selected.is_none());
    }

    fn spans() -> Vec<SectionSpan> {
        vec![
            SectionSpan { id: "home", top: 0.0, height: 600.0 },
            SectionSpan { id: "about", top: 600.0, height: 400.0 },
            SectionSpan { id: "committees", top: 1000.0, height: 800.0 },
        ]
    }

    #[test]
    fn scroll_position_resolves_to_the_containing_section() {
        assert_eq!(resolve_active_section(100.0, &spans()), Some("home"));
        assert_eq!(resolve_active_section(1500.0, &spans()), Some("committees"));
    }

    #[test]
    fn section_top_edge_is_inclusive_and_bottom_edge_exclusive() {
        assert_eq!(resolve_active_section(600.0, &spans()), Some("about"));
        assert_eq!(resolve_active_section(599.0, &spans()), Some("home"));
        assert_eq!(resolve_active_section(999.0, &spans()), Some("about"));
    }

    #[test]
    fn overlapping_sections_resolve_to_the_last_one() {
        let overlapping = vec![
            SectionSpan { id: "a", top: 0.0, height: 500.0 },
            SectionSpan { id: "b", top: 400.0, height: 300.0 },
        ];
        assert_eq!(resolve_active_section(450.0, &overlapping), Some("b"));
    }

    #[test]
    fn positions_outside_every_section_resolve_to_none() {
        assert_eq!(resolve_active_section(5000.0, &spans()), None);
    }

    #[test]
    fn initials_take_first_and_last_words() {
        assert_eq!(initials("Aarav Jain"), "AJ");
        assert_eq!(initials("Rachel C. Kujur"), "RK");
        assert_eq!(initials("Mudra"), "M");
        assert_eq!(initials(""), "");
    }

    #[test]
    fn filter_labels_match_the_buttons() {
        assert_eq!(filter_label(CommitteeFilter::All), "All Committees");
        assert_eq!(filter_label(CommitteeFilter::International), "International");
        assert_eq!(filter_label(CommitteeFilter::National), "National");
    }

    #[test]
    fn phases_map_to_their_card_accents() {
        assert_eq!(phase_class(Phase::Completed), "done");
        assert_eq!(phase_class(Phase::Current), "current");
        assert_eq!(phase_class(Phase::Upcoming), "upcoming");
    }
}
