use crate::ship::ShipClass;

/// Board edge length; the whole game is fixed to an 8×8 grid.
pub const GRID_SIZE: usize = 8;

/// Number of ships in the fleet.
pub const NUM_SHIPS: usize = 5;

/// The fixed fleet, placed in this order on every grid.
pub const FLEET: [ShipClass; NUM_SHIPS] = [
    ShipClass::new("Battleship", 4),
    ShipClass::new("Cruiser", 3),
    ShipClass::new("Cruiser", 3),
    ShipClass::new("Destroyer", 2),
    ShipClass::new("Destroyer", 2),
];

/// Total ship segments per side.
pub const FLEET_CELLS: usize = {
    let mut total = 0;
    let mut i = 0;
    while i < NUM_SHIPS {
        total += FLEET[i].length();
        i += 1;
    }
    total
};

/// Random placement attempts per ship before the generator gives up.
pub const PLACEMENT_ATTEMPTS: usize = 1000;
