use super::{Locale, Messages};

pub struct English;

impl Messages for English {
    fn locale(&self) -> Locale {
        Locale::En
    }

    fn entries(&self) -> &'static [(&'static str, &'static str)] {
        ENTRIES
    }
}

static ENTRIES: &[(&str, &str)] = &[
    ("header.docs", "Documentation"),
    ("header.blog", "Blog"),
    ("header.github", "GitHub"),
    ("header.login", "Vehicle Logins"),

    ("footer.version.version", "version"),
    ("footer.version.availableShort", "update"),
    ("footer.version.availableLong", "update available"),
    ("footer.version.modalTitle", "Update available"),
    ("footer.version.modalUpdateStarted", "Evcc will restart after the update.."),
    ("footer.version.modalInstalledVersion", "Currently installed version"),
    (
        "footer.version.modalNoReleaseNotes",
        "No release notes available. More information about the new version can be found here:",
    ),
    ("footer.version.modalCancel", "Cancel"),
    ("footer.version.modalUpdate", "Install"),
    ("footer.version.modalUpdateNow", "Install now"),
    ("footer.version.modalDownload", "Download"),
    ("footer.version.modalUpdateStatusStart", "Update started: "),
    ("footer.version.modalUpdateStatusFailed", "Update failed: "),

    ("footer.sponsor.sponsoredShort", "thanks"),
    ("footer.sponsor.sponsoredLong", "thank you {sponsor}"),
    ("footer.sponsor.supportProjectShort", "support"),
    ("footer.sponsor.supportProjectLong", "support the project"),

    ("notifications.modalTitle", "Notifications"),
    ("notifications.dismissAll", "Dismiss all"),

    ("main.energyflow.noEnergy", "No Energyflow"),
    ("main.energyflow.homePower", "Consumption"),
    ("main.energyflow.pvProduction", "Production"),
    ("main.energyflow.battery", "Battery"),
    ("main.energyflow.batteryCharge", "Battery charge"),
    ("main.energyflow.batteryDischarge", "Battery discharge"),
    ("main.energyflow.gridImport", "Grid import"),
    ("main.energyflow.selfConsumption", "Self consumption"),
    ("main.energyflow.pvExport", "Grid export"),

    ("main.mode.stop", "Stop"),
    ("main.mode.minpv", "Min+PV"),
    ("main.mode.pv", "PV"),
    ("main.mode.now", "Now"),

    ("main.loadpoint.fallbackName", "Loadpoint"),
    ("main.loadpoint.remoteDisabledSoft", "{source}: Adaptive PV-Charging disabled"),
    ("main.loadpoint.remoteDisabledHard", "{source}: Disabled"),

    ("main.vehicle.fallbackName", "Vehicle"),

    ("main.vehicleSoC.disconnected", "disconnected"),
    ("main.vehicleSoC.charging", "charging"),
    ("main.vehicleSoC.ready", "ready"),
    ("main.vehicleSoC.connected", "connected"),

    ("main.vehicleSubline.mincharge", "min charge to {soc}%"),

    ("main.provider.login", "log in"),
    ("main.provider.logout", "log out"),

    ("main.loadpointDetails.power", "Power"),
    ("main.loadpointDetails.vehicleRange", "Range"),
    ("main.loadpointDetails.charged", "Charged"),
    ("main.loadpointDetails.duration", "Duration"),
    ("main.loadpointDetails.remaining", "Remaining"),
];
