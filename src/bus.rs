//! # Device Bus
//!
//! [`Bus`] dispatches CPU reads and writes across a 16-bit address space to
//! attached [`Device`]s. It keeps an ordered attachment list; each attachment
//! maps a base address and length onto a device, and a device may be attached
//! a second time as a *mirror*, aliasing the same underlying storage at
//! another base.
//!
//! Unlike physical hardware, unmapped accesses are errors rather than open
//! bus reads; that turns wild pointers in emulated programs into immediate,
//! debuggable faults instead of silent `0xFF` reads.

use log::{debug, warn};

use crate::devices::Device;
use crate::memory::MemoryBus;

/// Errors produced by bus configuration and access.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BusError {
    /// Read from an address no device owns.
    #[error("read from unmapped address 0x{0:04X}")]
    UnmappedRead(u16),

    /// Write to an address no device owns.
    #[error("write to unmapped address 0x{0:04X}")]
    UnmappedWrite(u16),

    /// Write to a read-only device under [`RomWritePolicy::Fault`].
    #[error("write to read-only device at 0x{0:04X}")]
    WriteToReadOnly(u16),

    /// Attachment would overlap an existing attachment.
    #[error(
        "attachment at 0x{base:04X}-0x{end:04X} overlaps existing attachment \
         at 0x{existing_base:04X}-0x{existing_end:04X}"
    )]
    Overlap {
        /// Base address of the rejected attachment.
        base: u16,
        /// Last address of the rejected attachment.
        end: u16,
        /// Base address of the attachment already present.
        existing_base: u16,
        /// Last address of the attachment already present.
        existing_end: u16,
    },

    /// Attachment would extend past the end of the address space.
    #[error("device of {size} bytes does not fit at base 0x{base:04X}")]
    DoesNotFit {
        /// Requested base address.
        base: u16,
        /// Device size in bytes.
        size: u32,
    },

    /// Program image would extend past the end of the address space.
    #[error("image of {len} bytes does not fit at origin 0x{origin:04X}")]
    ImageOverflow {
        /// Requested load origin.
        origin: u16,
        /// Image length in bytes.
        len: usize,
    },
}

/// What the bus does with writes that resolve to a read-only device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RomWritePolicy {
    /// Drop the write silently, like physical ROM. The default.
    #[default]
    Ignore,
    /// Fail the write with [`BusError::WriteToReadOnly`].
    Fault,
}

/// Handle to an attached device, returned by [`Bus::attach`].
///
/// Used to create mirrors of an already-attached device.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeviceId(usize);

/// One entry in the attachment list.
struct Attachment {
    base: u16,
    len: u32,
    device: usize,
    mirror: bool,
}

impl Attachment {
    /// Half-open span in u32 space, so a range ending at 0xFFFF needs no
    /// special casing.
    fn span(&self) -> (u32, u32) {
        (self.base as u32, self.base as u32 + self.len)
    }

    fn contains(&self, addr: u16) -> bool {
        let (start, end) = self.span();
        (addr as u32) >= start && (addr as u32) < end
    }
}

fn spans_overlap(a: (u32, u32), b: (u32, u32)) -> bool {
    a.0 < b.1 && b.0 < a.1
}

/// The system bus: an ordered list of device attachments over a 64KB
/// address space.
///
/// The bus owns its devices. The CPU borrows the bus for the duration of a
/// step; hosts reach devices afterwards through [`Bus::device_at`].
///
/// # Examples
///
/// ```rust
/// use mos6502::{Bus, BusError, MemoryBus, Ram};
///
/// let mut bus = Bus::new();
/// let ram = bus.attach(0x0000, Box::new(Ram::new(0x0800))).unwrap();
///
/// // Mirror the same 2KB of RAM at 0x0800, like NES work RAM.
/// bus.attach_mirror(ram, 0x0800).unwrap();
///
/// bus.write(0x0042, 0xAB).unwrap();
/// assert_eq!(bus.read(0x0842).unwrap(), 0xAB);
///
/// // Nothing owns 0x9000.
/// assert_eq!(bus.read(0x9000), Err(BusError::UnmappedRead(0x9000)));
/// ```
pub struct Bus {
    devices: Vec<Box<dyn Device>>,
    attachments: Vec<Attachment>,
    rom_write_policy: RomWritePolicy,
}

impl Bus {
    /// Creates an empty bus with the default [`RomWritePolicy::Ignore`].
    pub fn new() -> Self {
        Self {
            devices: Vec::new(),
            attachments: Vec::new(),
            rom_write_policy: RomWritePolicy::Ignore,
        }
    }

    /// Changes how writes to read-only devices are handled.
    pub fn set_rom_write_policy(&mut self, policy: RomWritePolicy) {
        self.rom_write_policy = policy;
    }

    /// Attaches `device` at `base`, claiming `base .. base + size`.
    ///
    /// Fails with [`BusError::Overlap`] if the range collides with any
    /// existing attachment, or [`BusError::DoesNotFit`] if it would extend
    /// past `0xFFFF`. Returns a [`DeviceId`] usable with
    /// [`attach_mirror`](Bus::attach_mirror) and for host-side inspection.
    pub fn attach(&mut self, base: u16, device: Box<dyn Device>) -> Result<DeviceId, BusError> {
        let len = device.size();
        self.check_fit(base, len)?;

        let id = DeviceId(self.devices.len());
        debug!(
            "bus: attach {} bytes at 0x{:04X} (writable: {})",
            len,
            base,
            device.writable()
        );
        self.devices.push(device);
        self.attachments.push(Attachment {
            base,
            len,
            device: id.0,
            mirror: false,
        });
        Ok(id)
    }

    /// Attaches a second address range aliasing an already-attached device.
    ///
    /// Reads and writes through the mirror hit the same underlying storage
    /// as the canonical attachment; nothing is copied.
    pub fn attach_mirror(&mut self, id: DeviceId, base: u16) -> Result<(), BusError> {
        let len = self.devices[id.0].size();
        self.check_fit(base, len)?;

        debug!("bus: mirror device {} at 0x{:04X}", id.0, base);
        self.attachments.push(Attachment {
            base,
            len,
            device: id.0,
            mirror: true,
        });
        Ok(())
    }

    /// Writes a raw program image through the bus at `origin`.
    ///
    /// The image is headerless bytes, exactly as an assembler's raw output
    /// mode produces them; the caller chooses the origin. Each byte goes
    /// through [`write`](MemoryBus::write), so the image must land on
    /// writable, mapped devices.
    pub fn load(&mut self, origin: u16, image: &[u8]) -> Result<(), BusError> {
        if origin as usize + image.len() > 0x10000 {
            return Err(BusError::ImageOverflow {
                origin,
                len: image.len(),
            });
        }
        debug!("bus: loading {} byte image at 0x{:04X}", image.len(), origin);
        for (i, &byte) in image.iter().enumerate() {
            self.write(origin + i as u16, byte)?;
        }
        Ok(())
    }

    /// Borrows the device mapped at `addr`, downcast to its concrete type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mos6502::{Bus, MemoryBus, Printer};
    ///
    /// let mut bus = Bus::new();
    /// bus.attach(0xD000, Box::new(Printer::new())).unwrap();
    ///
    /// bus.write(0xD000, b'A').unwrap();
    /// bus.write(0xD001, 0x01).unwrap();
    ///
    /// let printer = bus.device_at::<Printer>(0xD000).unwrap();
    /// assert_eq!(printer.transcript(), ["A"]);
    /// ```
    pub fn device_at<T: Device + 'static>(&self, addr: u16) -> Option<&T> {
        let (index, _) = self.find(addr)?;
        self.devices[index].as_any().downcast_ref::<T>()
    }

    /// Mutably borrows the device mapped at `addr`, downcast to its
    /// concrete type.
    pub fn device_at_mut<T: Device + 'static>(&mut self, addr: u16) -> Option<&mut T> {
        let (index, _) = self.find(addr)?;
        self.devices[index].as_any_mut().downcast_mut::<T>()
    }

    fn check_fit(&self, base: u16, len: u32) -> Result<(), BusError> {
        if len == 0 || base as u32 + len > 0x10000 {
            return Err(BusError::DoesNotFit { base, size: len });
        }
        let span = (base as u32, base as u32 + len);
        for existing in &self.attachments {
            if spans_overlap(span, existing.span()) {
                return Err(BusError::Overlap {
                    base,
                    end: (span.1 - 1) as u16,
                    existing_base: existing.base,
                    existing_end: (existing.span().1 - 1) as u16,
                });
            }
        }
        Ok(())
    }

    /// Resolves an address to `(device index, local offset)`.
    fn find(&self, addr: u16) -> Option<(usize, u16)> {
        self.attachments
            .iter()
            .find(|a| a.contains(addr))
            .map(|a| (a.device, (addr - a.base) as u16))
    }
}

impl Default for Bus {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryBus for Bus {
    fn read(&self, addr: u16) -> Result<u8, BusError> {
        match self.find(addr) {
            Some((device, offset)) => Ok(self.devices[device].read_local(offset)),
            None => Err(BusError::UnmappedRead(addr)),
        }
    }

    fn write(&mut self, addr: u16, value: u8) -> Result<(), BusError> {
        match self.find(addr) {
            Some((device, offset)) => {
                if self.devices[device].writable() {
                    self.devices[device].write_local(offset, value);
                    Ok(())
                } else {
                    match self.rom_write_policy {
                        RomWritePolicy::Ignore => {
                            warn!("bus: ignored write to read-only 0x{addr:04X}");
                            Ok(())
                        }
                        RomWritePolicy::Fault => Err(BusError::WriteToReadOnly(addr)),
                    }
                }
            }
            None => Err(BusError::UnmappedWrite(addr)),
        }
    }
}
