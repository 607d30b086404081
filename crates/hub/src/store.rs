use chrono::{DateTime, Utc};
use models::{Hotel, Reservation, Room, RoomNumber};

use crate::error::{Entity, Field, HubError, HubResult, StayError};

/// Owned copy of both collections, taken for export
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot {
    pub hotels: Vec<Hotel>,
    pub reservations: Vec<Reservation>,
}

/// In-memory owner of hotels, their rooms and reservations.
///
/// A room is booked exactly while some reservation that has not checked out
/// points at it. Identifiers come from counters that only move forward, so an
/// id is never handed out twice within the life of a store (until `reset`).
#[derive(Debug)]
pub struct HotelHub {
    hotels: Vec<Hotel>,
    reservations: Vec<Reservation>,
    next_hotel_id: i32,
    next_reservation_id: i32,
}

impl Default for HotelHub {
    fn default() -> Self {
        Self::new()
    }
}

fn require(value: &str, field: Field) -> HubResult<()> {
    if value.is_empty() {
        return Err(HubError::Validation(field));
    }
    Ok(())
}

impl HotelHub {
    pub fn new() -> Self {
        Self {
            hotels: Vec::new(),
            reservations: Vec::new(),
            next_hotel_id: 1,
            next_reservation_id: 1,
        }
    }

    pub fn create_hotel(&mut self, name: &str, location: &str) -> HubResult<&Hotel> {
        require(name, Field::HotelName)?;
        require(location, Field::HotelLocation)?;

        if self.hotels.iter().any(|h| h.name == name) {
            return Err(HubError::DuplicateName(name.to_owned()));
        }

        let id = self.next_hotel_id;
        self.next_hotel_id += 1;
        self.hotels
            .push(Hotel::new(id, name.to_owned(), location.to_owned()));

        Ok(&self.hotels[self.hotels.len() - 1])
    }

    pub fn list_hotels(&self) -> &[Hotel] {
        &self.hotels
    }

    pub fn hotel(&self, id: i32) -> HubResult<&Hotel> {
        self.hotels
            .iter()
            .find(|h| h.id == id)
            .ok_or(HubError::NotFound(Entity::Hotel))
    }

    fn hotel_mut(&mut self, id: i32) -> HubResult<&mut Hotel> {
        self.hotels
            .iter_mut()
            .find(|h| h.id == id)
            .ok_or(HubError::NotFound(Entity::Hotel))
    }

    /// Renames / relocates a hotel. Name uniqueness is only enforced on create.
    pub fn update_hotel(&mut self, id: i32, name: &str, location: &str) -> HubResult<&Hotel> {
        let hotel = self.hotel_mut(id)?;
        require(name, Field::HotelName)?;
        require(location, Field::HotelLocation)?;

        hotel.name = name.to_owned();
        hotel.location = location.to_owned();
        Ok(hotel)
    }

    /// Removes a hotel along with every reservation that points at it,
    /// checked in or not.
    pub fn delete_hotel(&mut self, id: i32) -> HubResult<()> {
        let index = self
            .hotels
            .iter()
            .position(|h| h.id == id)
            .ok_or(HubError::NotFound(Entity::Hotel))?;

        self.reservations.retain(|r| r.hotel_id != id);
        self.hotels.remove(index);
        Ok(())
    }

    pub fn add_room_to_hotel(
        &mut self,
        hotel_id: i32,
        room_number: impl Into<RoomNumber>,
    ) -> HubResult<&Room> {
        let hotel = self.hotel_mut(hotel_id)?;
        Ok(hotel.push_room(room_number.into()))
    }

    pub fn list_rooms(&self, hotel_id: i32) -> HubResult<&[Room]> {
        Ok(&self.hotel(hotel_id)?.rooms)
    }

    pub fn create_reservation(
        &mut self,
        hotel_id: i32,
        room_id: i32,
        guest_name: &str,
    ) -> HubResult<&Reservation> {
        require(guest_name, Field::GuestName)?;

        let room = self
            .hotel_mut(hotel_id)?
            .room_mut(room_id)
            .ok_or(HubError::NotFound(Entity::Room))?;
        if room.is_booked {
            return Err(HubError::Conflict { hotel_id, room_id });
        }
        room.is_booked = true;

        let id = self.next_reservation_id;
        self.next_reservation_id += 1;
        self.reservations.push(Reservation::new(
            id,
            hotel_id,
            room_id,
            guest_name.to_owned(),
        ));

        Ok(&self.reservations[self.reservations.len() - 1])
    }

    pub fn list_reservations(&self) -> &[Reservation] {
        &self.reservations
    }

    pub fn reservation(&self, id: i32) -> HubResult<&Reservation> {
        self.reservations
            .iter()
            .find(|r| r.id == id)
            .ok_or(HubError::NotFound(Entity::Reservation))
    }

    fn reservation_index(&self, id: i32) -> HubResult<usize> {
        self.reservations
            .iter()
            .position(|r| r.id == id)
            .ok_or(HubError::NotFound(Entity::Reservation))
    }

    /// Points a reservation at another hotel/room and renames the guest.
    ///
    /// This is not a move: the target room's availability is not checked and
    /// neither room's booked flag changes.
    pub fn update_reservation(
        &mut self,
        id: i32,
        hotel_id: i32,
        room_id: i32,
        guest_name: &str,
    ) -> HubResult<&Reservation> {
        let index = self.reservation_index(id)?;
        self.hotel(hotel_id)?
            .room(room_id)
            .ok_or(HubError::NotFound(Entity::Room))?;

        let reservation = &mut self.reservations[index];
        reservation.hotel_id = hotel_id;
        reservation.room_id = room_id;
        reservation.guest_name = guest_name.to_owned();
        Ok(reservation)
    }

    /// Removes a reservation and frees its room.
    pub fn delete_reservation(&mut self, id: i32) -> HubResult<()> {
        let index = self.reservation_index(id)?;
        let reservation = self.reservations.remove(index);
        self.sync_room(reservation.hotel_id, reservation.room_id);
        Ok(())
    }

    pub fn check_in(&mut self, id: i32) -> HubResult<&Reservation> {
        self.check_in_at(id, Utc::now())
    }

    pub fn check_in_at(&mut self, id: i32, at: DateTime<Utc>) -> HubResult<&Reservation> {
        let index = self.reservation_index(id)?;
        let reservation = &mut self.reservations[index];
        if reservation.check_in.is_some() {
            return Err(StayError::AlreadyCheckedIn.into());
        }

        reservation.check_in = Some(at);
        Ok(reservation)
    }

    pub fn check_out(&mut self, id: i32) -> HubResult<&Reservation> {
        self.check_out_at(id, Utc::now())
    }

    /// Closes the stay and frees the room.
    pub fn check_out_at(&mut self, id: i32, at: DateTime<Utc>) -> HubResult<&Reservation> {
        let index = self.reservation_index(id)?;
        let reservation = &mut self.reservations[index];
        if reservation.check_in.is_none() {
            return Err(StayError::NotCheckedIn.into());
        }
        if reservation.check_out.is_some() {
            return Err(StayError::AlreadyCheckedOut.into());
        }

        reservation.check_out = Some(at);
        let (hotel_id, room_id) = (reservation.hotel_id, reservation.room_id);
        self.sync_room(hotel_id, room_id);

        Ok(&self.reservations[index])
    }

    /// Drops every hotel. Reservations are left as they are.
    pub fn clear_hotels(&mut self) {
        self.hotels.clear();
    }

    /// Drops every reservation. Rooms keep their booked flag.
    pub fn clear_reservations(&mut self) {
        self.reservations.clear();
    }

    /// Returns the store to its freshly constructed state, counters included.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            hotels: self.hotels.clone(),
            reservations: self.reservations.clone(),
        }
    }

    /// Recomputes a room's booked flag from the reservations still holding it.
    /// A reference to a hotel or room that no longer exists is ignored.
    fn sync_room(&mut self, hotel_id: i32, room_id: i32) {
        let held = self
            .reservations
            .iter()
            .any(|r| r.is_active() && r.references(hotel_id, room_id));

        if let Some(room) = self
            .hotels
            .iter_mut()
            .find(|h| h.id == hotel_id)
            .and_then(|h| h.room_mut(room_id))
        {
            room.is_booked = held;
        }
    }
}
