pub const INDEX_HTML: &str = r##"<!doctype html>
<html lang="en">
  <head>
    <meta charset="utf-8" />
    <meta name="viewport" content="width=device-width, initial-scale=1" />
    <title>Molecular Structures</title>
    <link rel="preconnect" href="https://fonts.googleapis.com" />
    <link rel="preconnect" href="https://fonts.gstatic.com" crossorigin />
    <link href="https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&display=swap" rel="stylesheet" />
    <script type="module" src="https://ajax.googleapis.com/ajax/libs/model-viewer/3.5.0/model-viewer.min.js"></script>
    <style>
      html, body { margin: 0; padding: 0; min-height: 100%; background: #0b0c10; color: #e6e6e6; font-family: "Space Grotesk", "Segoe UI", sans-serif; }
      header { display: flex; align-items: center; justify-content: space-between; padding: 12px 20px; border-bottom: 1px solid #1f2630; }
      .brand { font-size: 18px; font-weight: 600; letter-spacing: 0.02em; }
      nav { display: flex; gap: 6px; }
      button { background: #11151b; color: #e6e6e6; border: 1px solid #2a2f36; border-radius: 6px; padding: 6px 12px; font-size: 12px; cursor: pointer; font-family: inherit; }
      button:hover { border-color: #3c6a9e; }
      button.active { background: #1a2736; border-color: #3c6a9e; color: #cbe3ff; }
      main { padding: 16px 20px; }
      .hidden { display: none !important; }
      #cards { display: grid; grid-template-columns: repeat(4, minmax(0, 1fr)); gap: 10px; }
      .molecule-card { background: #0f141b; border: 1px solid #2a2f36; border-radius: 10px; padding: 10px 12px; cursor: pointer; }
      .molecule-card.active { border-color: #3c6a9e; background: #14202e; }
      .molecule-card .key { font-size: 10px; color: #7f8895; float: right; }
      .molecule-card h3 { margin: 0 0 4px; font-size: 14px; font-weight: 600; }
      .molecule-card p { margin: 0; font-size: 11px; color: #9aa3ad; }
      #compareView { display: grid; grid-template-columns: 1fr 1fr; gap: 12px; margin-top: 14px; }
      .compare-slot { position: relative; background: rgba(10,12,16,0.9); border: 1px solid #2a2f36; border-radius: 10px; overflow: hidden; cursor: pointer; }
      .compare-slot.slot-highlight { border-color: #d7a84a; box-shadow: 0 0 0 1px #d7a84a inset; }
      .slot-header { display: flex; justify-content: space-between; align-items: center; padding: 8px 10px; border-bottom: 1px solid #1f2630; }
      .slot-info h4 { margin: 0; font-size: 13px; }
      .slot-info p { margin: 2px 0 0; font-size: 11px; color: #9aa3ad; min-height: 14px; }
      .slot-clear { padding: 2px 8px; }
      .compare-slot:not(.slot-filled) .slot-clear { visibility: hidden; }
      .empty-slot { position: absolute; inset: 48px 0 0 0; display: flex; align-items: center; justify-content: center; font-size: 12px; color: #5d6773; pointer-events: none; }
      .compare-slot.slot-filled .empty-slot { display: none; }
      .viewer-status { position: absolute; bottom: 8px; left: 10px; font-size: 11px; color: #e07a62; }
      model-viewer { width: 100%; height: 360px; background: #0b0c10; }
      #controls { display: flex; gap: 8px; margin-top: 10px; }
      #comparisonTable { width: 100%; margin-top: 14px; border-collapse: collapse; font-size: 12px; }
      #comparisonTable th, #comparisonTable td { border-bottom: 1px solid #1f2630; padding: 6px 8px; text-align: left; }
      #comparisonTable th { color: #9aa3ad; font-weight: 500; }
      #singleView { display: grid; grid-template-columns: 3fr 2fr; gap: 16px; margin-top: 14px; }
      #singleView model-viewer { height: 480px; border: 1px solid #2a2f36; border-radius: 10px; }
      #singleTitle { margin: 0; font-size: 22px; }
      #singleFormula { color: #9aa3ad; margin: 4px 0 12px; }
      #singleDescription { font-size: 13px; line-height: 1.5; }
      .property-item { display: flex; justify-content: space-between; padding: 4px 0; border-bottom: 1px solid #1f2630; font-size: 12px; }
      .property-label { color: #9aa3ad; }
      #singleFacts { font-size: 12px; line-height: 1.6; padding-left: 18px; }
      .hint { font-size: 11px; color: #7f8895; margin-top: 14px; }
    </style>
  </head>
  <body>
    <header>
      <div class="brand">Molecular Structures</div>
      <nav>
        <button class="nav-btn active" data-view="compare">Compare</button>
        <button class="nav-btn" data-view="single">Single</button>
      </nav>
    </header>
    <main>
      <div id="cards"></div>

      <section id="compareView">
        <div class="compare-slot" id="slotA" data-slot="a">
          <div class="slot-header">
            <div class="slot-info" id="infoA"><h4>Molecule A</h4><p></p></div>
            <button class="slot-clear" data-slot="a">Clear</button>
          </div>
          <div class="empty-slot">Pick a molecule or click to place the selected one</div>
          <model-viewer id="viewerA" camera-controls touch-action="pan-y" shadow-intensity="1"></model-viewer>
          <div class="viewer-status" id="statusA"></div>
        </div>
        <div class="compare-slot" id="slotB" data-slot="b">
          <div class="slot-header">
            <div class="slot-info" id="infoB"><h4>Molecule B</h4><p></p></div>
            <button class="slot-clear" data-slot="b">Clear</button>
          </div>
          <div class="empty-slot">Pick a molecule or click to place the selected one</div>
          <model-viewer id="viewerB" camera-controls touch-action="pan-y" shadow-intensity="1"></model-viewer>
          <div class="viewer-status" id="statusB"></div>
        </div>
        <div id="controls">
          <button id="syncRotation">Sync rotation</button>
          <button id="resetBoth">Reset views</button>
        </div>
      </section>

      <table id="comparisonTable">
        <thead><tr><th>Property</th><th id="tableHeaderA">Molecule A</th><th id="tableHeaderB">Molecule B</th></tr></thead>
        <tbody id="tableBody"></tbody>
      </table>

      <section id="singleView" class="hidden">
        <model-viewer id="singleViewer" camera-controls auto-rotate touch-action="pan-y" shadow-intensity="1"></model-viewer>
        <div>
          <h2 id="singleTitle"></h2>
          <div id="singleFormula"></div>
          <p id="singleDescription"></p>
          <div id="singleProperties"></div>
          <ul id="singleFacts"></ul>
          <div class="viewer-status" id="statusSingle" style="position: static;"></div>
        </div>
      </section>

      <div class="hint">Keys 1-4 pick a molecule. Tab switches between Compare and Single.</div>
    </main>

    <script>
      const viewers = {
        a: document.getElementById("viewerA"),
        b: document.getElementById("viewerB"),
        single: document.getElementById("singleViewer"),
      };
      const statusEls = {
        a: document.getElementById("statusA"),
        b: document.getElementById("statusB"),
        single: document.getElementById("statusSingle"),
      };
      const cameraHandlers = {};
      let snapshot = null;

      // Responses are applied strictly in dispatch order.
      let queue = Promise.resolve();

      function post(action) {
        queue = queue.then(() => send(action)).catch((err) => console.error("action failed", action, err));
        return queue;
      }

      async function send(action) {
        const res = await fetch("/api/action", {
          method: "POST",
          headers: { "Content-Type": "application/json" },
          body: JSON.stringify(action),
        });
        const body = await res.json().catch(() => ({}));
        if (!res.ok) {
          console.warn("action rejected", action, body.error);
          return;
        }
        apply(body.snapshot);
        run(body.commands);
      }

      function run(commands) {
        for (const cmd of commands) {
          const viewer = viewers[cmd.viewer];
          switch (cmd.type) {
            case "load":
              viewer.setAttribute("src", cmd.model);
              break;
            case "unload":
              viewer.removeAttribute("src");
              break;
            case "set_camera":
              viewer.cameraOrbit = cmd.pose.orbit;
              viewer.fieldOfView = cmd.pose.field_of_view;
              break;
            case "reset_camera":
              viewer.cameraOrbit = "auto auto auto";
              viewer.cameraTarget = "auto auto auto";
              viewer.fieldOfView = "auto";
              break;
          }
        }
      }

      function setText(id, text) {
        document.getElementById(id).textContent = text;
      }

      function renderSlot(card) {
        const key = card.slot.toUpperCase();
        const info = document.getElementById(`info${key}`);
        info.querySelector("h4").textContent = card.title;
        info.querySelector("p").textContent = card.formula;
        document.getElementById(`slot${key}`).classList.toggle("slot-filled", card.molecule !== null);
      }

      function renderTable(table) {
        setText("tableHeaderA", table.headers[0]);
        setText("tableHeaderB", table.headers[1]);
        const body = document.getElementById("tableBody");
        body.replaceChildren(...table.rows.map((row) => {
          const tr = document.createElement("tr");
          for (const text of [row.label, ...row.values]) {
            const td = document.createElement("td");
            td.textContent = text;
            tr.appendChild(td);
          }
          return tr;
        }));
      }

      function renderDetail(detail) {
        setText("singleTitle", detail.title);
        setText("singleFormula", detail.formula);
        setText("singleDescription", detail.description);
        document.getElementById("singleProperties").replaceChildren(...detail.properties.map((p) => {
          const item = document.createElement("div");
          item.className = "property-item";
          const label = document.createElement("span");
          label.className = "property-label";
          label.textContent = p.label;
          const value = document.createElement("span");
          value.className = "property-value";
          value.textContent = p.value;
          item.append(label, value);
          return item;
        }));
        document.getElementById("singleFacts").replaceChildren(...detail.facts.map((fact) => {
          const li = document.createElement("li");
          li.textContent = fact;
          return li;
        }));
      }

      function apply(next) {
        snapshot = next;
        const compare = next.view === "compare";
        document.querySelectorAll(".nav-btn").forEach((btn) => btn.classList.toggle("active", btn.dataset.view === next.view));
        document.getElementById("compareView").classList.toggle("hidden", !compare);
        document.getElementById("comparisonTable").classList.toggle("hidden", !compare);
        document.getElementById("singleView").classList.toggle("hidden", compare);
        document.querySelectorAll(".molecule-card").forEach((card) => card.classList.toggle("active", card.dataset.molecule === next.selected));

        next.slots.forEach(renderSlot);
        if (next.table) renderTable(next.table);
        if (next.detail) renderDetail(next.detail);

        for (const [id, el] of Object.entries(statusEls)) {
          const status = next.viewers[id].status;
          el.textContent = status.state === "failed" ? `Model failed to load: ${status.message}` : "";
        }

        document.getElementById("syncRotation").classList.toggle("active", next.sync_enabled);
        setCameraListeners(next.sync_enabled);
      }

      function cameraPose(viewer) {
        return {
          orbit: viewer.getCameraOrbit().toString(),
          field_of_view: `${viewer.getFieldOfView()}deg`,
        };
      }

      function setCameraListeners(enabled) {
        for (const id of ["a", "b"]) {
          if (enabled && !cameraHandlers[id]) {
            const handler = (event) => {
              if (event.detail.source !== "user-interaction") return;
              post({ type: "camera_changed", viewer: id, pose: cameraPose(viewers[id]) });
            };
            viewers[id].addEventListener("camera-change", handler);
            cameraHandlers[id] = handler;
          } else if (!enabled && cameraHandlers[id]) {
            viewers[id].removeEventListener("camera-change", cameraHandlers[id]);
            delete cameraHandlers[id];
          }
        }
      }

      function highlightNextSlot(on) {
        document.querySelectorAll(".compare-slot").forEach((slot) => {
          slot.classList.toggle("slot-highlight", on && snapshot && snapshot.view === "compare" && slot.dataset.slot === snapshot.next_slot);
        });
      }

      function buildCards(molecules) {
        const container = document.getElementById("cards");
        molecules.forEach((m, i) => {
          const card = document.createElement("div");
          card.className = "molecule-card";
          card.dataset.molecule = m.id;
          const key = document.createElement("span");
          key.className = "key";
          key.textContent = String(i + 1);
          const title = document.createElement("h3");
          title.textContent = m.name;
          const formula = document.createElement("p");
          formula.textContent = m.formula;
          card.append(key, title, formula);
          card.addEventListener("click", () => post({ type: "select_molecule", id: m.id }));
          card.addEventListener("mouseenter", () => highlightNextSlot(true));
          card.addEventListener("mouseleave", () => highlightNextSlot(false));
          container.appendChild(card);
        });
      }

      for (const [id, viewer] of Object.entries(viewers)) {
        viewer.addEventListener("load", () => post({ type: "viewer_loaded", viewer: id, model: viewer.getAttribute("src") || "" }));
        viewer.addEventListener("error", (event) => post({
          type: "viewer_load_failed",
          viewer: id,
          model: viewer.getAttribute("src") || "",
          message: (event.detail && event.detail.type) || "load error",
        }));
      }

      document.querySelectorAll(".nav-btn").forEach((btn) => {
        btn.addEventListener("click", () => post({ type: "set_view", view: btn.dataset.view }));
      });
      document.querySelectorAll(".slot-clear").forEach((btn) => {
        btn.addEventListener("click", (event) => {
          event.stopPropagation();
          post({ type: "clear_slot", slot: btn.dataset.slot });
        });
      });
      document.querySelectorAll(".compare-slot").forEach((slot) => {
        slot.addEventListener("click", (event) => {
          if (event.target.closest(".slot-clear") || event.target.closest(".slot-header")) return;
          post({ type: "click_slot", slot: slot.dataset.slot });
        });
      });
      document.getElementById("syncRotation").addEventListener("click", () => post({ type: "toggle_sync" }));
      document.getElementById("resetBoth").addEventListener("click", () => post({ type: "reset" }));

      document.addEventListener("keydown", (event) => {
        if (["1", "2", "3", "4"].includes(event.key)) {
          post({ type: "key", key: event.key });
        } else if (event.key === "Tab" && event.target === document.body) {
          event.preventDefault();
          post({ type: "key", key: "Tab" });
        }
      });

      (async () => {
        const molecules = await (await fetch("/api/molecules")).json();
        buildCards(molecules);
        apply(await (await fetch("/api/state")).json());
      })();
    </script>
  </body>
</html>
"##;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn viewer_src_goes_through_the_attribute_only() {
        assert!(INDEX_HTML.contains(r#"viewer.setAttribute("src", cmd.model)"#));
        assert!(INDEX_HTML.contains(r#"viewer.removeAttribute("src")"#));
        assert_eq!(INDEX_HTML.matches(r#"model: viewer.getAttribute("src")"#).count(), 2);
        assert!(!INDEX_HTML.contains("viewer.src ="));
        for tag in INDEX_HTML.lines().filter(|l| l.contains("<model-viewer ")) {
            assert!(!tag.contains(" src="), "{tag}");
        }
    }

    #[test]
    fn actions_are_sent_through_one_queue() {
        assert!(INDEX_HTML.contains("queue = queue.then(() => send(action))"));
        assert_eq!(INDEX_HTML.matches("fetch(\"/api/action\"").count(), 1);
        assert!(!INDEX_HTML.contains("async function post"));
    }
}
