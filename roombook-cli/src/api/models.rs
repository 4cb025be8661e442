//! Wire models for the floors endpoint. Supplied entirely by the backend,
//! never mutated locally.

use serde::Deserialize;

/// A backend-defined container of rooms, identified by id and floor number.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Floor {
    pub id: String,
    pub floor_number: i64,
    pub rooms: Vec<Room>,
}

/// A bookable space with seat capacity, equipment flags and booking status.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    // The backend serializes the room id under its storage key.
    #[serde(rename = "_id")]
    pub id: String,
    pub room_name: String,
    pub room_number: String,
    pub seats: u32,
    pub projector: bool,
    pub whiteboard: bool,
    pub speaker_system: bool,
    pub is_booked: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_floor_with_rooms() {
        let payload = serde_json::json!([{
            "id": "F1",
            "floorNumber": 1,
            "rooms": [{
                "_id": "R1",
                "roomName": "Alpha",
                "roomNumber": "101",
                "seats": 12,
                "projector": true,
                "whiteboard": false,
                "speakerSystem": false,
                "isBooked": false
            }]
        }]);

        let floors: Vec<Floor> = serde_json::from_value(payload).unwrap();
        assert_eq!(floors.len(), 1);
        assert_eq!(floors[0].id, "F1");
        assert_eq!(floors[0].floor_number, 1);

        let room = &floors[0].rooms[0];
        assert_eq!(room.id, "R1");
        assert_eq!(room.room_name, "Alpha");
        assert_eq!(room.room_number, "101");
        assert_eq!(room.seats, 12);
        assert!(room.projector);
        assert!(!room.whiteboard);
        assert!(!room.speaker_system);
        assert!(!room.is_booked);
    }

    #[test]
    fn deserializes_floor_with_empty_rooms() {
        let payload = serde_json::json!([{ "id": "F1", "floorNumber": 1, "rooms": [] }]);
        let floors: Vec<Floor> = serde_json::from_value(payload).unwrap();
        assert!(floors[0].rooms.is_empty());
    }
}
