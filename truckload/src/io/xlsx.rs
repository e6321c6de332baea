use crate::err::SolveError;
use crate::io::ext_repr::{ExtDataset, ExtPlan, ExtShipment, ExtTruckType};
use anyhow::{Context, Result};
use calamine::{Data, Range, Reader, Xlsx};
use itertools::Itertools;
use log::debug;
use rust_xlsxwriter::Workbook;
use std::io::Cursor;

/// Required header row of the shipment sheet (sheet 0).
const SHIPMENT_COLS: [&str; 4] = ["Origin", "Destination", "Weight", "Volume"];
/// Required header row of the truck sheet (sheet 1).
const TRUCK_COLS: [&str; 5] = [
    "Origin",
    "Destination",
    "Number of Trucks",
    "Truck Capacity (Kg Weight)",
    "Truck Capacity (Cubic Meter Volume)",
];

/// Parses the two-sheet input workbook into an [`ExtDataset`].
///
/// Sheets are addressed by position, not by name: sheet 0 holds shipments,
/// sheet 1 holds the truck fleet. Header cells must match the expected
/// column names exactly.
pub fn read_workbook(bytes: &[u8]) -> Result<ExtDataset, SolveError> {
    let mut workbook: Xlsx<_> = Xlsx::new(Cursor::new(bytes))
        .map_err(|e| SolveError::MalformedInput(format!("could not open workbook: {e}")))?;

    let shipments_range = sheet_at(&mut workbook, 0, "shipments")?;
    let trucks_range = sheet_at(&mut workbook, 1, "trucks")?;

    let shipments = parse_shipments(&shipments_range)?;
    let trucks = parse_trucks(&trucks_range)?;
    debug!(
        "[IO] workbook parsed: {} shipment row(s), {} truck row(s)",
        shipments.len(),
        trucks.len()
    );

    Ok(ExtDataset { shipments, trucks })
}

fn sheet_at<R: std::io::Read + std::io::Seek>(
    workbook: &mut Xlsx<R>,
    index: usize,
    role: &str,
) -> Result<Range<Data>, SolveError> {
    workbook
        .worksheet_range_at(index)
        .ok_or_else(|| {
            SolveError::MalformedInput(format!(
                "workbook has no sheet at position {index} (expected the {role} sheet)"
            ))
        })?
        .map_err(|e| SolveError::MalformedInput(format!("could not read the {role} sheet: {e}")))
}

/// Locates each required column in the header row, by exact match.
fn column_indices<const N: usize>(
    range: &Range<Data>,
    cols: [&str; N],
    role: &str,
) -> Result<[usize; N], SolveError> {
    let header = range.rows().next().ok_or_else(|| {
        SolveError::MalformedInput(format!("the {role} sheet is empty (no header row)"))
    })?;
    let mut indices = [0usize; N];
    for (slot, col) in cols.iter().enumerate() {
        indices[slot] = header
            .iter()
            .position(|cell| cell.to_string() == *col)
            .ok_or_else(|| {
                SolveError::MalformedInput(format!(
                    "the {role} sheet is missing the required column '{col}'"
                ))
            })?;
    }
    Ok(indices)
}

fn cell<'a>(row: &'a [Data], idx: usize) -> &'a Data {
    row.get(idx).unwrap_or(&Data::Empty)
}

fn cell_to_f64(c: &Data) -> Option<f64> {
    match c {
        Data::Float(f) => Some(*f),
        Data::Int(i) => Some(*i as f64),
        Data::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn cell_to_count(c: &Data) -> Option<i64> {
    match c {
        Data::Int(i) => Some(*i),
        Data::Float(f) if f.fract() == 0.0 => Some(*f as i64),
        Data::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn parse_shipments(range: &Range<Data>) -> Result<Vec<ExtShipment>, SolveError> {
    let [origin, destination, weight, volume] = column_indices(range, SHIPMENT_COLS, "shipments")?;

    let mut shipments = Vec::new();
    for (row_idx, row) in range.rows().enumerate().skip(1) {
        let cells = [origin, destination, weight, volume].map(|i| cell(row, i));
        if cells.iter().all(|c| matches!(**c, Data::Empty)) {
            // phantom row from spreadsheet editing, not data
            continue;
        }
        let [origin, destination, weight, volume] = cells;
        shipments.push(ExtShipment {
            origin: origin.to_string(),
            destination: destination.to_string(),
            weight: cell_to_f64(weight).ok_or_else(|| {
                SolveError::MalformedInput(format!(
                    "shipment row {row_idx}: non-numeric weight '{weight}'"
                ))
            })?,
            volume: cell_to_f64(volume).ok_or_else(|| {
                SolveError::MalformedInput(format!(
                    "shipment row {row_idx}: non-numeric volume '{volume}'"
                ))
            })?,
        });
    }
    Ok(shipments)
}

fn parse_trucks(range: &Range<Data>) -> Result<Vec<ExtTruckType>, SolveError> {
    let [origin, destination, n_trucks, weight_cap, volume_cap] =
        column_indices(range, TRUCK_COLS, "trucks")?;

    let mut trucks = Vec::new();
    for (row_idx, row) in range.rows().enumerate().skip(1) {
        let cells = [origin, destination, n_trucks, weight_cap, volume_cap].map(|i| cell(row, i));
        if cells.iter().all(|c| matches!(**c, Data::Empty)) {
            continue;
        }
        let [origin, destination, n_trucks, weight_cap, volume_cap] = cells;
        trucks.push(ExtTruckType {
            origin: origin.to_string(),
            destination: destination.to_string(),
            n_trucks: cell_to_count(n_trucks).ok_or_else(|| {
                SolveError::MalformedInput(format!(
                    "truck row {row_idx}: number of trucks '{n_trucks}' is not an integer"
                ))
            })?,
            weight_capacity: cell_to_f64(weight_cap).ok_or_else(|| {
                SolveError::MalformedInput(format!(
                    "truck row {row_idx}: non-numeric weight capacity '{weight_cap}'"
                ))
            })?,
            volume_capacity: cell_to_f64(volume_cap).ok_or_else(|| {
                SolveError::MalformedInput(format!(
                    "truck row {row_idx}: non-numeric volume capacity '{volume_cap}'"
                ))
            })?,
        });
    }
    Ok(trucks)
}

/// Serializes a plan into the two-sheet output workbook, returned as an
/// in-memory xlsx buffer.
///
/// Sheet `shipmentwise_trucks` repeats the input shipment columns and
/// appends the assigned truck label; sheet `truckwise_shipments` lists the
/// 1-based shipment ids per dispatched unit.
pub fn write_workbook(plan: &ExtPlan) -> Result<Vec<u8>> {
    let mut workbook = Workbook::new();

    {
        let sheet = workbook.add_worksheet();
        sheet.set_name("shipmentwise_trucks")?;
        for (col, name) in SHIPMENT_COLS.iter().chain(std::iter::once(&"Truck")).enumerate() {
            sheet.write_string(0, col as u16, *name)?;
        }
        for (i, row) in plan.shipments.iter().enumerate() {
            let r = (i + 1) as u32;
            sheet.write_string(r, 0, &row.origin)?;
            sheet.write_string(r, 1, &row.destination)?;
            sheet.write_number(r, 2, row.weight)?;
            sheet.write_number(r, 3, row.volume)?;
            sheet.write_string(r, 4, &row.truck)?;
        }
    }

    {
        let sheet = workbook.add_worksheet();
        sheet.set_name("truckwise_shipments")?;
        for (col, name) in ["Truck", "Origin", "Destination", "Shipments"]
            .iter()
            .enumerate()
        {
            sheet.write_string(0, col as u16, *name)?;
        }
        for (i, row) in plan.trucks.iter().enumerate() {
            let r = (i + 1) as u32;
            sheet.write_string(r, 0, &row.truck)?;
            sheet.write_string(r, 1, &row.origin)?;
            sheet.write_string(r, 2, &row.destination)?;
            sheet.write_string(r, 3, format!("[{}]", row.shipments.iter().join(", ")))?;
        }
    }

    workbook
        .save_to_buffer()
        .context("could not serialize the output workbook")
}
