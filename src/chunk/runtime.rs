use crate::ir::Mode;

pub const EVENTS_PATH: &str = "/__weft/events";

const REGISTRY_SOURCE: &str = r#"(function () {
  var definitions = {};
  var cache = {};
  var pending = [];

  function load(id) {
    if (cache[id]) {
      return cache[id].exports;
    }

    var definition = definitions[id];

    if (!definition) {
      throw new Error("weft: module " + id + " not found");
    }

    var module = (cache[id] = { exports: {} });

    definition[1].call(module.exports, module, module.exports, function (specifier) {
      if (!(specifier in definition[0])) {
        throw new Error("weft: cannot find module \"" + specifier + "\"");
      }

      return load(definition[0][specifier]);
    });

    return module.exports;
  }

  function flush() {
    var waiting = [];

    pending.forEach(function (entries) {
      if (entries.every(function (id) { return id in definitions; })) {
        entries.forEach(load);
      } else {
        waiting.push(entries);
      }
    });

    pending = waiting;
  }

  function register(chunk) {
    chunk.modules.forEach(function (module) {
      definitions[module[0]] = [module[1], module[2]];
    });

    if (chunk.entries.length) {
      pending.push(chunk.entries);
    }

    flush();
  }

  var chunks = (self.weftChunks = self.weftChunks || []);

  chunks.forEach(register);
  chunks.push = register;
})();
"#;

const LIVE_UPDATE_SOURCE: &str = r#"(function () {
  if (typeof EventSource === "undefined") {
    return;
  }

  var source = new EventSource("/__weft/events");

  source.addEventListener("reload", function () {
    location.reload();
  });
  source.addEventListener("build-error", function (event) {
    console.error("weft: " + event.data);
  });
})();
"#;

pub fn runtime_source(mode: Mode) -> String {
    let mut source = REGISTRY_SOURCE.to_owned();

    if !mode.is_production() {
        source.push_str(LIVE_UPDATE_SOURCE);
    }

    source
}
