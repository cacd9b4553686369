use crate::domain::listing::Listing;

const PLACEHOLDER_PHOTO: &str = "https://placehold.co/1200x800.png";

fn photos(n: usize) -> Vec<String> {
    vec![PLACEHOLDER_PHOTO.to_string(); n]
}

/// Sample parcels used to seed an empty database and as test data.
pub fn sample_listings() -> Vec<Listing> {
    vec![
        Listing {
            id: "golden-valley-estate".into(),
            name: "Golden Valley Estate".into(),
            location: "Napa Valley, CA".into(),
            area: 50.0,
            price: 2_500_000.0,
            description: "A sprawling 50-acre estate in the heart of Napa Valley, perfect for vineyards or a luxury residence. Features rolling hills and panoramic views.".into(),
            photos: photos(3),
        },
        Listing {
            id: "aspen-meadows".into(),
            name: "Aspen Meadows".into(),
            location: "Aspen, CO".into(),
            area: 10.0,
            price: 1_800_000.0,
            description: "A pristine 10-acre plot surrounded by Aspen trees, offering seclusion and stunning mountain views. Ideal for a private mountain retreat.".into(),
            photos: photos(3),
        },
        Listing {
            id: "lakefront-pines".into(),
            name: "Lakefront Pines".into(),
            location: "Lake Tahoe, NV".into(),
            area: 2.0,
            price: 2_100_000.0,
            description: "Two wooded acres with private shoreline access and year-round views across the lake. Utilities at the lot line.".into(),
            photos: photos(2),
        },
        Listing {
            id: "red-rock-ranch".into(),
            name: "Red Rock Ranch".into(),
            location: "Sedona, AZ".into(),
            area: 35.0,
            price: 1_200_000.0,
            description: "Thirty-five acres of high desert framed by red sandstone formations, with a seasonal creek and paved road frontage.".into(),
            photos: photos(2),
        },
        Listing {
            id: "willamette-vineyard-parcel".into(),
            name: "Willamette Vineyard Parcel".into(),
            location: "Willamette Valley, OR".into(),
            area: 60.0,
            price: 3_400_000.0,
            description: "South-facing slopes with established pinot noir rows, a well, and room for a tasting room or residence.".into(),
            photos: photos(3),
        },
        Listing {
            id: "hill-country-acreage".into(),
            name: "Hill Country Acreage".into(),
            location: "Fredericksburg, TX".into(),
            area: 120.0,
            price: 950_000.0,
            description: "Open pasture and live oak groves on 120 acres, ag-exempt, with a stock tank and barn.".into(),
            photos: photos(1),
        },
    ]
}
