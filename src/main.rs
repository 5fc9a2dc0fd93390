use pluscodes_rs::{CodeArea, DEFAULT_CODE_LENGTH, PlusCode, decode};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let latitude = 47.365590;
    let longitude = 8.524997;

    let cell = PlusCode::from_lat_lng(latitude, longitude, DEFAULT_CODE_LENGTH)?;

    println!("Plus code: {}", cell.code);
    println!("Center: ({}, {})", cell.center().y(), cell.center().x());
    println!("Cell size: {:.1} m", cell.distance_across());

    let area: CodeArea = decode(&cell.code)?;
    println!("Area: {}", serde_json::to_string_pretty(&area)?);

    let short = cell.shorten(latitude, longitude)?;
    println!("Short code near here: {}", short);

    let recovered = PlusCode::recover(&short, &(longitude, latitude), DEFAULT_CODE_LENGTH)?;
    println!("Recovered: {}", recovered.code);

    Ok(())
}
