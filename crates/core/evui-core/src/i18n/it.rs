use super::{Locale, Messages};

pub struct Italian;

impl Messages for Italian {
    fn locale(&self) -> Locale {
        Locale::It
    }

    fn entries(&self) -> &'static [(&'static str, &'static str)] {
        ENTRIES
    }
}

// Untranslated entries are kept in English until the Italian copy lands.
static ENTRIES: &[(&str, &str)] = &[
    ("header.docs", "Documentazione"),
    ("header.blog", "Blog"),
    ("header.github", "GitHub"),
    ("header.login", "Iscrizioni"),

    ("footer.version.version", "versione"),
    ("footer.version.availableShort", "aggiornamento"),
    ("footer.version.availableLong", "aggiornamento disponibile"),
    ("footer.version.modalTitle", "Aggiornamento disponibile"),
    ("footer.version.modalUpdateStarted", "Evcc ripartirà dopo l'aggiornamento.."),
    ("footer.version.modalInstalledVersion", "Versione correntemente installata"),
    (
        "footer.version.modalNoReleaseNotes",
        "Non ci sono note di rilascio disponibili. Altre informazioni circa la nuova versione si trovano qui:",
    ),
    ("footer.version.modalCancel", "Cancella"),
    ("footer.version.modalUpdate", "Aggiorna"),
    ("footer.version.modalUpdateNow", "Aggiorna ora"),
    ("footer.version.modalDownload", "Download"),
    ("footer.version.modalUpdateStatusStart", "Aggiornamento iniziato: "),
    ("footer.version.modalUpdateStatusFailed", "Aggiornamento fallito: "),

    ("footer.sponsor.sponsoredShort", "grazie"),
    ("footer.sponsor.sponsoredLong", "grazie {sponsor}"),
    ("footer.sponsor.supportProjectShort", "supporto"),
    ("footer.sponsor.supportProjectLong", "supporta questo progetto"),

    ("notifications.modalTitle", "Notifiche"),
    ("notifications.dismissAll", "Rimuovi tutte"),

    ("main.energyflow.noEnergy", "No Energyflow"),
    ("main.energyflow.homePower", "Consumption"),
    ("main.energyflow.pvProduction", "Produzione"),
    ("main.energyflow.battery", "Batteria"),
    ("main.energyflow.batteryCharge", "Battery charge"),
    ("main.energyflow.batteryDischarge", "Battery discharge"),
    ("main.energyflow.gridImport", "Grid import"),
    ("main.energyflow.selfConsumption", "Self consumption"),
    ("main.energyflow.pvExport", "Grid export"),

    ("main.mode.stop", "Stop"),
    ("main.mode.minpv", "Min+FV"),
    ("main.mode.pv", "FV"),
    ("main.mode.now", "Ora"),

    ("main.loadpoint.fallbackName", "Punto di carica"),
    ("main.loadpoint.remoteDisabledSoft", "{source}: Ricarica FV adattiva disabilitata"),
    ("main.loadpoint.remoteDisabledHard", "{source}: Disabilitato"),

    ("main.vehicle.fallbackName", "Veicolo"),

    ("main.vehicleSoC.disconnected", "disconesso"),
    ("main.vehicleSoC.charging", "carica"),
    ("main.vehicleSoC.ready", "pronto"),
    ("main.vehicleSoC.connected", "collegato"),

    ("main.vehicleSubline.mincharge", "carica minima fino a {soc}%"),

    ("main.provider.login", "accedere"),
    ("main.provider.logout", "disconnettersi"),

    ("main.loadpointDetails.power", "Potenza"),
    ("main.loadpointDetails.vehicleRange", "Autonomia"),
    ("main.loadpointDetails.charged", "Ricaricato"),
    ("main.loadpointDetails.duration", "Duarata"),
    ("main.loadpointDetails.remaining", "Rimanenti"),
];
