use chrono::{Datelike, Local, NaiveDate};
use kawara_common::calendar::{CalendarConfig, CalendarEvent, CalendarMonth};
use leptos::prelude::*;
use std::collections::HashMap;

const WEEKDAY_LABELS: [&str; 7] = ["日", "月", "火", "水", "木", "金", "土"];

/// Archive calendar widget. Navigation is clamped to the configured year
/// range; days with a post link to it, future days never do.
#[component]
pub fn Calendar(events: Vec<CalendarEvent>, config: CalendarConfig) -> impl IntoView {
    let today = Local::now().date_naive();
    let month = RwSignal::new(CalendarMonth::containing(today));
    let start_year = config.start_year.unwrap_or_else(|| today.year());
    let end_year = config.end_year.unwrap_or_else(|| today.year());

    let event_urls = StoredValue::new(
        events
            .into_iter()
            .map(|event| (event.date, event.url))
            .collect::<HashMap<String, String>>(),
    );

    let prev = move |_| {
        month.update(|m| {
            let p = m.prev();
            if p.year >= start_year {
                *m = p;
            }
        });
    };
    let next = move |_| {
        month.update(|m| {
            let n = m.next();
            if n.year <= end_year {
                *m = n;
            }
        });
    };

    view! {
        <div class="calendar">
            <div class="calendar-nav">
                <button type="button" on:click=prev>"<"</button>
                <span class="calendar-title">
                    <a href=move || {
                        format!("/blog/archive?year={}", month.with(|m| m.year))
                    }>{move || month.with(|m| format!("{}年", m.year))}</a>
                    <a href=move || {
                        month
                            .with(|m| {
                                format!("/blog/archive?year={}&month={:02}", m.year, m.month)
                            })
                    }>{move || month.with(|m| format!("{}月", m.month))}</a>
                </span>
                <button type="button" on:click=next>">"</button>
            </div>
            <div class="calendar-select">
                <select on:change=move |ev| {
                    if let Ok(year) = event_target_value(&ev).parse::<i32>() {
                        month.update(|m| m.year = year);
                    }
                }>
                    {(start_year..=end_year)
                        .rev()
                        .map(|year| {
                            view! {
                                <option
                                    value=year
                                    selected=move || month.with(|m| m.year == year)
                                >
                                    {format!("{year}年")}
                                </option>
                            }
                        })
                        .collect::<Vec<_>>()}
                </select>
                <select on:change=move |ev| {
                    if let Ok(m) = event_target_value(&ev).parse::<u32>() {
                        if (1..=12).contains(&m) {
                            month.update(|cur| cur.month = m);
                        }
                    }
                }>
                    {(1..=12u32)
                        .map(|m| {
                            view! {
                                <option value=m selected=move || month.with(|cur| cur.month == m)>
                                    {format!("{m}月")}
                                </option>
                            }
                        })
                        .collect::<Vec<_>>()}
                </select>
            </div>
            <table class="calendar-grid">
                <thead>
                    <tr>
                        {WEEKDAY_LABELS
                            .iter()
                            .enumerate()
                            .map(|(i, label)| {
                                let class = if i == 0 { Some("is-sunday") } else { None };
                                view! { <th class=class>{*label}</th> }
                            })
                            .collect::<Vec<_>>()}
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        let m = month.get();
                        m.weeks()
                            .into_iter()
                            .map(|week| {
                                let cells = week
                                    .iter()
                                    .enumerate()
                                    .map(|(weekday, day)| day_cell(
                                        &m,
                                        weekday,
                                        *day,
                                        today,
                                        event_urls,
                                    ))
                                    .collect::<Vec<_>>();
                                view! { <tr>{cells}</tr> }
                            })
                            .collect::<Vec<_>>()
                    }}
                </tbody>
            </table>
        </div>
    }
}

fn day_cell(
    month: &CalendarMonth,
    weekday: usize,
    day: Option<u32>,
    today: NaiveDate,
    event_urls: StoredValue<HashMap<String, String>>,
) -> impl IntoView {
    let Some(day) = day else {
        return view! { <td class="is-empty"></td> }.into_any();
    };

    let date = month.day(day);
    let is_today = date == Some(today);
    let is_future = date.is_some_and(|d| d > today);
    let url = event_urls.with_value(|urls| urls.get(&month.day_key(day)).cloned());

    let mut classes = Vec::new();
    if weekday == 0 {
        classes.push("is-sunday");
    }
    if is_today {
        classes.push("is-today");
    }
    if is_future {
        classes.push("is-future");
    }
    let class = (!classes.is_empty()).then(|| classes.join(" "));

    match url.filter(|_| !is_future) {
        Some(url) => view! {
            <td class=class>
                <a href=url>{day}</a>
            </td>
        }
        .into_any(),
        None => view! { <td class=class>{day}</td> }.into_any(),
    }
}
