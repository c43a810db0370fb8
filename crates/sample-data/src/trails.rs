//! The four mock hiking spots from the original browse screen.
//!
//! Trails 1 and 2 carry the full metadata shown on the detail screen; the
//! other two only ever appeared as browse cards, so their long-form fields
//! are empty.

use trailhead::domain::{
    Camping, Difficulty, NearbyShops, Permission, TicketEntry, TrailCatalogue, TrailId,
    TrailRecord, TrailRecordDraft, Wildlife,
};

use crate::error::SampleDataError;

fn browse_card(
    id: &str,
    name: &str,
    location: &str,
    difficulty: Difficulty,
    rating: f32,
    review_count: u32,
    distance: &str,
    image: &str,
    featured: bool,
) -> Result<TrailRecordDraft, SampleDataError> {
    Ok(TrailRecordDraft {
        id: TrailId::new(id)?,
        name: name.to_owned(),
        location: location.to_owned(),
        difficulty,
        rating,
        review_count,
        distance: distance.to_owned(),
        image: image.to_owned(),
        featured,
        description: String::new(),
        weather_conditions: String::new(),
        wildlife: Wildlife::Absent,
        permission: Permission::NotRequired,
        shops: NearbyShops::Absent,
        ticket: TicketEntry::NotRequired,
        dangerous_spots: String::new(),
        water_available: false,
        camping: Camping::NotAllowed,
        distance_from_user: String::new(),
        added_by: None,
        added_date: None,
        coordinates: None,
    })
}

fn mount_rainier() -> Result<TrailRecordDraft, SampleDataError> {
    let mut draft = browse_card(
        "1",
        "Mount Rainier Summit",
        "Washington, USA",
        Difficulty::Hard,
        4.8,
        234,
        "14.4 mi",
        "https://images.pexels.com/photos/1666021/pexels-photo-1666021.jpeg",
        true,
    )?;
    draft.description = "A challenging but rewarding climb to the summit of Mount Rainier. \
        The trail offers breathtaking views of the Cascade Range and surrounding wilderness."
        .to_owned();
    draft.weather_conditions = "Best visited June-September. Snow conditions can be severe in \
        winter. Check weather reports before attempting. Temperature can drop significantly at \
        higher elevations."
        .to_owned();
    draft.wildlife = Wildlife::Present {
        details: "Black bears, mountain goats, and marmots are commonly seen. Store food \
            properly and make noise while hiking."
            .to_owned(),
    };
    draft.permission = Permission::Required {
        details: "Climbing permit required from National Park Service. Cost: $52 per person. \
            Reserve in advance at recreation.gov."
            .to_owned(),
    };
    draft.shops = NearbyShops::Absent;
    draft.ticket = TicketEntry::Required {
        price: "$30 park entrance fee + $52 climbing permit".to_owned(),
    };
    draft.dangerous_spots = "Steep ice fields above 10,000 ft. Crevasse danger on Emmons \
        Glacier. Weather can change rapidly."
        .to_owned();
    draft.water_available = false;
    draft.camping = Camping::Allowed {
        details: "Camping permitted at designated sites only. Camp Muir (10,080 ft) requires \
            advance reservation."
            .to_owned(),
    };
    draft.distance_from_user = "2.3 hours drive".to_owned();
    Ok(draft)
}

fn angel_falls() -> Result<TrailRecordDraft, SampleDataError> {
    let mut draft = browse_card(
        "2",
        "Angel Falls Trail",
        "Venezuela",
        Difficulty::Moderate,
        4.6,
        156,
        "8.2 mi",
        "https://images.pexels.com/photos/1054218/pexels-photo-1054218.jpeg",
        true,
    )?;
    draft.description = "Trek through tropical rainforest to witness the world's tallest \
        waterfall. An unforgettable journey through pristine wilderness."
        .to_owned();
    draft.weather_conditions = "Wet season (May-November) best for waterfall flow. Dry season \
        offers easier hiking but less water flow."
        .to_owned();
    draft.wildlife = Wildlife::Present {
        details: "Jaguars, poisonous snakes, and various tropical birds. Local guide highly \
            recommended."
            .to_owned(),
    };
    draft.permission = Permission::Required {
        details: "Must be part of organized tour. Independent hiking not permitted. Contact \
            local tour operators."
            .to_owned(),
    };
    draft.shops = NearbyShops::Available {
        details: "Basic supplies available in Canaima village. Limited selection - bring \
            essentials from Caracas."
            .to_owned(),
    };
    draft.ticket = TicketEntry::Required {
        price: "$200-400 depending on tour package".to_owned(),
    };
    draft.dangerous_spots = "Slippery rocks near waterfall base. River crossings during wet \
        season can be dangerous."
        .to_owned();
    draft.water_available = true;
    draft.camping = Camping::Allowed {
        details: "Camping included in tour packages. Hammocks provided by tour operators."
            .to_owned(),
    };
    draft.distance_from_user = "14.7 hours flight + boat".to_owned();
    Ok(draft)
}

/// The four mock hiking spots, in browse-screen order.
///
/// # Errors
///
/// Fails with [`SampleDataError::Trail`] if a record no longer satisfies
/// entity validation; the data is fixed, so this indicates a programming
/// error in this crate.
pub fn sample_trails() -> Result<Vec<TrailRecord>, SampleDataError> {
    let drafts = vec![
        mount_rainier()?,
        angel_falls()?,
        browse_card(
            "3",
            "Torres del Paine",
            "Chile",
            Difficulty::Hard,
            4.9,
            89,
            "52 mi",
            "https://images.pexels.com/photos/1320684/pexels-photo-1320684.jpeg",
            false,
        )?,
        browse_card(
            "4",
            "Antelope Canyon",
            "Arizona, USA",
            Difficulty::Easy,
            4.5,
            412,
            "1.5 mi",
            "https://images.pexels.com/photos/33041/antelope-canyon-lower-canyon-arizona.jpg",
            false,
        )?,
    ];

    drafts
        .into_iter()
        .map(|draft| TrailRecord::new(draft).map_err(SampleDataError::from))
        .collect()
}

/// A catalogue seeded with [`sample_trails`].
///
/// # Errors
///
/// Propagates [`sample_trails`] failures and the catalogue's unique-id
/// check.
pub fn sample_catalogue() -> Result<TrailCatalogue, SampleDataError> {
    Ok(TrailCatalogue::new(sample_trails()?)?)
}
